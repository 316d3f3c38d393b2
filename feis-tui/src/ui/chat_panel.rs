//! Panel 2 — Assistant: message log and input line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use feis_core::chat::{Author, ChatMessage};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in app.interactions.chat.messages() {
        lines.extend(message_lines(message));
        lines.push(Line::from(""));
    }

    // Keep the newest messages in view.
    let height = chunks[0].height as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[0],
    );

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", theme::accent()),
        Span::styled(app.chat_input.as_str(), theme::text()),
        Span::styled("▏", theme::accent()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(true))
            .title(" Ta question ")
            .title_style(theme::muted()),
    );
    f.render_widget(input, chunks[1]);
}

fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let (who, style) = match message.author {
        Author::Bot => ("FEIS", theme::accent_bold()),
        Author::User => ("Toi", theme::text()),
    };
    vec![
        Line::from(vec![
            Span::styled(who, style),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                theme::muted(),
            ),
        ]),
        Line::from(Span::styled(message.text.clone(), theme::text())),
    ]
}
