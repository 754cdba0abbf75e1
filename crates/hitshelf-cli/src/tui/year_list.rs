use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::App;

/// Render the release year list view.
pub fn render(frame: &mut Frame, app: &App<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Year table
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_help(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let catalog = app.catalog();
    let title = Paragraph::new(format!(
        "Popular Songs of 2023    {} songs in {} release years",
        catalog.total_song_count(),
        catalog.year_count()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let buckets = app.catalog().buckets();

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Year").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Songs"),
        Cell::from("First Track"),
    ])
    .height(1);

    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    let visible_start = app.year_list_offset;
    let visible_end = (visible_start + viewport_height).min(buckets.len());

    let rows: Vec<Row> = buckets
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, bucket)| {
            let style = if i == app.selected_year {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let first = bucket
                .songs()
                .first()
                .map(|s| s.track_name().to_string())
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(bucket.label().to_string()),
                Cell::from(format!("{}", bucket.len())),
                Cell::from(first),
            ])
            .style(style)
        })
        .collect();

    let title = if buckets.len() > viewport_height {
        format!(
            "Release Years [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            buckets.len()
        )
    } else {
        "Release Years".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("  \u{2191}/k Up  \u{2193}/j Down  Enter Open  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
