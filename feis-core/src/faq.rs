//! Keyword-matching FAQ for the beginner investor assistant.
//!
//! An ordered list of (predicate, answer) pairs, evaluated first-match-wins
//! against the lower-cased question. No ranking or scoring.

use serde::{Deserialize, Serialize};

/// A keyword predicate over a lower-cased question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "match",
    content = "keyword",
    rename_all = "snake_case",
    from = "RawKeyword"
)]
pub enum Keyword {
    /// Matches anywhere in the question.
    Substring(String),
    /// Matches a whole word only.
    Word(String),
}

/// Wire form of [`Keyword`], lower-cased on the way in.
#[derive(Deserialize)]
#[serde(tag = "match", content = "keyword", rename_all = "snake_case")]
enum RawKeyword {
    Substring(String),
    Word(String),
}

impl From<RawKeyword> for Keyword {
    fn from(raw: RawKeyword) -> Self {
        match raw {
            RawKeyword::Substring(k) => Keyword::Substring(k.to_lowercase()),
            RawKeyword::Word(k) => Keyword::Word(k.to_lowercase()),
        }
    }
}

impl Keyword {
    /// Single-character keywords would match almost any question as a
    /// substring, so they only match whole words.
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if keyword.chars().count() <= 1 {
            Keyword::Word(keyword)
        } else {
            Keyword::Substring(keyword)
        }
    }

    pub fn matches(&self, question: &str) -> bool {
        match self {
            Keyword::Substring(k) => question.contains(k.as_str()),
            Keyword::Word(k) => question
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == k),
        }
    }
}

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub keywords: Vec<Keyword>,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(keywords: &[&str], answer: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| Keyword::new(k)).collect(),
            answer: answer.to_string(),
        }
    }

    pub fn matches(&self, question: &str) -> bool {
        self.keywords.iter().any(|k| k.matches(question))
    }
}

/// The assistant's question/answer book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqBook {
    pub entries: Vec<FaqEntry>,
    pub fallback: String,
}

pub const WELCOME: &str = "Bienvenue sur l’assistant FEIS. Pose une question simple : livret, ETF, crypto, risque… Je réponds avec une logique pédagogique.";

pub const FALLBACK: &str = "Je ne comprends pas complètement ta question, mais je peux te proposer une logique simple : séparer épargne de sécurité (livret), investissement long terme (ETF / obligations) et poche spéculative (crypto / stock-picking). C’est exactement ce qu’on travaille en atelier FEIS.";

impl FaqBook {
    /// Answer of the first matching entry, or the fallback.
    pub fn answer(&self, question: &str) -> &str {
        let q = question.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.matches(&q))
            .map(|e| e.answer.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Index of the first matching entry.
    pub fn matching_entry(&self, question: &str) -> Option<usize> {
        let q = question.to_lowercase();
        self.entries.iter().position(|e| e.matches(&q))
    }

    pub fn builtin() -> Self {
        Self {
            entries: vec![
                FaqEntry::new(
                    &["livret", "a", "livret a", "épargne"],
                    "Le livret sert à ta sécurité, pas à tout. En gros : 3–6 mois de dépenses sur livret pour les imprévus. Le reste, si horizon long (≥ 10 ans), peut aller vers ETF monde / obligations. Le réflexe FEIS : “épargne de sécurité” ≠ “épargne long terme”.",
                ),
                FaqEntry::new(
                    &["etf", "monde", "msci", "world"],
                    "Un ETF monde est un panier d’actions de nombreux pays. Tu ne paries pas sur une seule action, mais sur des centaines. Avantages : diversification, frais faibles. Prix à payer : les -20 % temporaires sont possibles, donc horizon long obligatoire.",
                ),
                FaqEntry::new(
                    &["crypto", "bitcoin", "btc", "eth", "ethereum"],
                    "FEIS traite la crypto comme une poche labo, pas une base de retraite. Typiquement 0–5 % max de ton patrimoine financier, uniquement avec de l’argent que tu acceptes de voir fortement baisser. Le vrai travail se fait d’abord sur cash + ETF.",
                ),
                FaqEntry::new(
                    &["risque", "peur", "perdre", "baisse", "-20"],
                    "Si un -20 % te fait paniquer, soit ton horizon est trop court, soit ton exposition aux actions est trop élevée. La règle : tu investis de l’argent dont tu n’as pas besoin avant plusieurs années, et tu définis un plan écrit avant la tempête, pas pendant.",
                ),
                FaqEntry::new(
                    &["moi", "étudiant", "débutant"],
                    "En tant qu’étudiant débutant : 1) construire un coussin de sécurité sur livret, 2) apprendre ce qu’est un ETF monde, 3) comprendre le lien entre marchés et politiques économiques. Le but n’est pas de battre le marché, mais de ne pas faire n’importe quoi.",
                ),
                FaqEntry::new(
                    &["feis", "club", "assos", "association"],
                    "FEIS est un club étudiant orienté marchés, macro et politiques publiques. On ne vend rien, on ne “place” pas de produits : on crée une culture d’investissement et un langage pro pour CV, entretiens, et projets.",
                ),
            ],
            fallback: FALLBACK.to_string(),
        }
    }
}

impl Default for FaqBook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_keywords_match_words_only() {
        let k = Keyword::new("a");
        assert!(k.matches("livret a ou pea ?"));
        assert!(!k.matches("je suis étudiant"));
    }

    #[test]
    fn substring_keywords() {
        let k = Keyword::new("ETF");
        assert_eq!(k, Keyword::Substring("etf".into()));
        assert!(k.matches("les etfs monde"));
    }

    #[test]
    fn deserialized_keywords_are_lower_cased() {
        let k: Keyword =
            serde_json::from_str(r#"{"match":"substring","keyword":"ETF"}"#).unwrap();
        assert_eq!(k, Keyword::Substring("etf".into()));

        let entry: FaqEntry = serde_json::from_str(
            r#"{"keywords":[{"match":"word","keyword":"A"}],"answer":"ok"}"#,
        )
        .unwrap();
        let book = FaqBook {
            entries: vec![entry],
            fallback: FALLBACK.to_string(),
        };
        assert_eq!(book.answer("Livret A ?"), "ok");
    }

    #[test]
    fn first_match_wins() {
        let book = FaqBook::builtin();
        // "épargne" (entry 0) and "crypto" (entry 2) both match.
        assert_eq!(book.matching_entry("épargne ou crypto ?"), Some(0));
    }

    #[test]
    fn case_insensitive() {
        let book = FaqBook::builtin();
        assert_eq!(book.matching_entry("BITCOIN"), Some(2));
        assert_eq!(book.matching_entry("Le club FEIS"), Some(5));
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let book = FaqBook::builtin();
        assert_eq!(book.answer("bonjour"), FALLBACK);
        assert_eq!(book.matching_entry("bonjour"), None);
    }
}
