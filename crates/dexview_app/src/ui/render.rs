use chrono::{DateTime, Local};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use dexview_core::{AppViewModel, EntryRowView, SelectedEntryView, SessionState};
use dexview_engine::{PageProgress, Stage};

use super::constants::{ALL_TYPES_LABEL, KEY_HELP, PLACEHOLDER_SPRITE};

pub fn draw(
    frame: &mut Frame,
    view: &AppViewModel,
    cursor: usize,
    progress: Option<&PageProgress>,
    last_page_at: Option<DateTime<Local>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // type filter bar
            Constraint::Min(0),    // entry table
            Constraint::Length(3), // status bar
        ])
        .split(frame.size());

    render_filter_bar(frame, chunks[0], view);
    render_table(frame, chunks[1], view, cursor);
    render_status_bar(frame, chunks[2], view, progress, last_page_at);

    if let Some(selected) = &view.modal {
        render_modal(frame, selected);
    }
}

fn render_filter_bar(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let inactive = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw("Type: ")];
    spans.push(Span::styled(
        ALL_TYPES_LABEL,
        if view.filter.is_none() { active } else { inactive },
    ));
    for option in &view.filter_options {
        spans.push(Span::raw(" | "));
        let style = if view.filter.as_deref() == Some(option.as_str()) {
            active
        } else {
            inactive
        };
        spans.push(Span::styled(option.clone(), style));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(bar, area);
}

fn render_table(frame: &mut Frame, area: Rect, view: &AppViewModel, cursor: usize) {
    let header_cells = ["#", "Name", "Types", "Sprite"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = view.rows.iter().map(|row| Row::new(entry_cells(row)).height(1));

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(24),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Pokemon ({} of {}) ", view.rows.len(), view.total_count)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !view.rows.is_empty() {
        table_state.select(Some(cursor));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn entry_cells(row: &EntryRowView) -> Vec<Cell<'static>> {
    let number = row
        .dex_number
        .map(|n| format!("#{n:03}"))
        .unwrap_or_else(|| "#???".to_string());
    let sprite = if row.has_sprite { "yes" } else { "-" };
    vec![
        Cell::from(number),
        Cell::from(row.name.clone()),
        Cell::from(row.categories.join(", ")),
        Cell::from(sprite),
    ]
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    progress: Option<&PageProgress>,
    last_page_at: Option<DateTime<Local>>,
) {
    let mut spans = vec![Span::styled(
        format!(" {} ", session_label(view.session)),
        session_style(view.session),
    )];

    if let Some(progress) = progress {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            progress_label(progress),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(at) = last_page_at {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("last page {} ", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(KEY_HELP),
    );
    frame.render_widget(status, area);
}

fn session_label(session: SessionState) -> &'static str {
    match session {
        SessionState::Idle => "Idle",
        SessionState::Loading => "Loading...",
        SessionState::Loaded => "Loaded",
        SessionState::Exhausted => "All pages loaded",
    }
}

fn session_style(session: SessionState) -> Style {
    match session {
        SessionState::Loading => Style::default().fg(Color::Yellow),
        SessionState::Exhausted => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::White),
    }
}

fn progress_label(progress: &PageProgress) -> String {
    match progress.stage {
        Stage::Listing => format!("listing page at offset {}", progress.offset),
        Stage::Enriching => match progress.entry_count {
            Some(count) => format!("enriching {count} entries"),
            None => "enriching".to_string(),
        },
        Stage::Done => "merging page".to_string(),
    }
}

fn render_modal(frame: &mut Frame, selected: &SelectedEntryView) {
    let area = centered_rect(60, 40, frame.size());
    frame.render_widget(Clear, area);

    let number = selected
        .dex_number
        .map(|n| format!("#{n:03}"))
        .unwrap_or_else(|| "#???".to_string());
    let sprite = selected
        .sprite_url
        .as_deref()
        .unwrap_or(PLACEHOLDER_SPRITE)
        .to_string();

    let lines = vec![
        Line::from(vec![
            Span::styled(number, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                selected.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Types:  {}", selected.categories.join(", "))),
        Line::from(format!("Sprite: {sprite}")),
        Line::from(""),
        Line::from(Span::styled(
            "esc closes",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", selected.name)),
    );
    frame.render_widget(modal, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
