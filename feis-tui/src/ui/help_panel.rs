//! Panel 4 — Aide: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "1-4", "Aller au panneau (hors saisie)");
    key(&mut lines, "Tab / Shift+Tab", "Panneau suivant / précédent");
    key(&mut lines, "q", "Quitter (hors saisie)");
    key(&mut lines, "Ctrl+C", "Quitter partout");
    lines.push(Line::from(""));

    section(&mut lines, "Panneau 1 — Desk marchés");
    key(&mut lines, "j / k", "Actif suivant / précédent");
    key(&mut lines, "d / m / y", "Horizon 1D / 1M / 1Y");
    key(&mut lines, "h / l", "Horizon plus court / plus long");
    key(&mut lines, "r", "Actualiser la variation du jour (simulation)");
    lines.push(Line::from(""));

    section(&mut lines, "Panneaux 2 et 3 — Assistant, Newsletter");
    key(&mut lines, "Enter", "Envoyer");
    key(&mut lines, "Backspace", "Effacer un caractère");
    key(&mut lines, "Esc", "Retour au desk");
    lines.push(Line::from(""));

    section(&mut lines, "À savoir");
    lines.push(Line::from(Span::styled(
        "  Les cours sont une maquette : aucune donnée de marché réelle.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line>, keys: &str, what: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<18}"), theme::text()),
        Span::styled(what.to_string(), theme::muted()),
    ]));
}
