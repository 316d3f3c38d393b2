//! Panel 1 — Desk marchés: asset rows, detail block, horizon buttons, chart.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use feis_core::view::Region;
use feis_core::Horizon;

use crate::app::AppState;
use crate::theme;
use crate::ui::chart_canvas::ChartCanvas;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(area);

    render_rows(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(columns[1]);

    render_detail(f, right[0], app);
    render_horizons(f, right[1], app);

    let chart = ChartCanvas::new(app.dashboard.surface()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(false)),
    );
    f.render_widget(chart, right[2]);
}

fn render_rows(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.dashboard.view();
    let catalog = app.dashboard.catalog();
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in panel.rows().iter().enumerate() {
        let name = catalog
            .get(&row.key)
            .map(|a| a.name.as_str())
            .unwrap_or(row.key.as_str());
        let value = panel.text(&Region::Value(row.key.clone())).unwrap_or("");
        let change = panel.text(&Region::Change(row.key.clone())).unwrap_or("");
        let change_style = match panel.trend(&row.key) {
            Some(trend) => Style::default().fg(theme::trend_color(trend)),
            None => theme::muted(),
        };

        let marker = if row.active { "▶ " } else { "  " };
        let mut name_style = if row.active {
            theme::accent_bold()
        } else {
            theme::text()
        };
        if i == app.asset_cursor {
            name_style = name_style.add_modifier(Modifier::UNDERLINED);
        }

        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(format!("{name:<14}"), name_style),
            Span::styled(format!("{value:>11} "), theme::text()),
            Span::styled(format!("{change:>8}"), change_style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::panel_border(false));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.dashboard.view();
    let text = |region: Region| panel.text(&region).unwrap_or("").to_string();

    let lines = vec![
        Line::from(vec![
            Span::styled(text(Region::AssetName), theme::accent_bold()),
            Span::raw("  "),
            Span::styled(text(Region::AssetTag), theme::muted()),
        ]),
        Line::from(Span::styled(text(Region::AssetComment), theme::text())),
        Line::from(Span::styled(text(Region::AssetRole), theme::muted())),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        area.inner(Margin::new(1, 0)),
    );
}

fn render_horizons(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.dashboard.view().active_horizon();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for horizon in Horizon::ALL {
        let style = if active == Some(horizon) {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", horizon.label()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
