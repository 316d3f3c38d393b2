//! Panel 3 — Newsletter: e-mail field and confirmation notice.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Reçois les prochains ateliers et la sélection d'articles FEIS.",
            theme::text(),
        )),
        Line::from(Span::styled(
            "Aucune adresse n'est conservée pour l'instant.",
            theme::muted(),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let field = Paragraph::new(Line::from(vec![
        Span::styled(app.email_input.as_str(), theme::text()),
        Span::styled("▏", theme::accent()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(true))
            .title(" E-mail ")
            .title_style(theme::muted()),
    );
    f.render_widget(field, chunks[1]);

    if let Some(notice) = app.interactions.newsletter.notice() {
        let para = Paragraph::new(Span::styled(
            notice.text.as_str(),
            Style::default().fg(theme::rgb(notice.color)),
        ))
        .wrap(Wrap { trim: true });
        f.render_widget(para, chunks[2]);
    }
}
