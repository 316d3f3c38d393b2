//! Newsletter sign-up form. Purely cosmetic: the address is never kept.

use crate::render::Rgba;

pub const CONFIRMATION: &str = "Inscription enregistrée côté front. Plus tard, ce bouton pourra être relié à un vrai système d’envoi.";

/// Transient message under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub color: Rgba,
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    notice: Option<Notice>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an address. Blank input is ignored and returns false.
    pub fn submit(&mut self, email: &str) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        self.notice = Some(Notice {
            text: CONFIRMATION.to_string(),
            color: Rgba::rgb(0x22, 0xc5, 0x5e),
        });
        true
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_ignored() {
        let mut form = NewsletterForm::new();
        assert!(!form.submit("  "));
        assert!(form.notice().is_none());
    }

    #[test]
    fn submit_shows_confirmation() {
        let mut form = NewsletterForm::new();
        assert!(form.submit("a@b.fr"));
        assert_eq!(form.notice().unwrap().text, CONFIRMATION);
        form.clear_notice();
        assert!(form.notice().is_none());
    }
}
