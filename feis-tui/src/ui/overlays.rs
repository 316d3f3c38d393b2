//! Welcome overlay shown on start.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" FEIS · Desk marchés ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Pour commencer :", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. j / k pour choisir un actif",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. d / m / y pour l'horizon 1D, 1M, 1Y",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. r pour actualiser la variation du jour",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Tab pour poser une question à l'assistant",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Données fictives, à but pédagogique uniquement.",
            theme::warning(),
        )),
        Line::from(""),
        Line::from(Span::styled("Appuie sur une touche…", theme::text())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
