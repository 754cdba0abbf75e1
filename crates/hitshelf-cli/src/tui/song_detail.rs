use hitshelf_core::{format_streams, Song};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::App;

/// Render the song detail view for the selected year.
pub fn render(frame: &mut Frame, app: &App<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Year header
            Constraint::Length(3), // Overall progress
            Constraint::Min(6),    // Song fields
            Constraint::Length(3), // Notice / help bar
        ])
        .split(area);

    render_year_header(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_song(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_year_header(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let year = app
        .browser
        .year()
        .and_then(|idx| app.catalog().year_label(idx).ok())
        .unwrap_or("?");
    let title = app
        .browser
        .title()
        .unwrap_or_else(|| "Songs | 0 of 0 songs".to_string());
    let header = Paragraph::new(format!("{}    {}", year, title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let text = app
        .browser
        .overall_progress()
        .map(|p| p.to_string())
        .unwrap_or_default();
    let progress = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(progress, area);
}

fn render_song(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let lines: Vec<Line<'_>> = match app.browser.current() {
        Some(song) => song_lines(song),
        None => vec![Line::from(Span::styled(
            "  No songs for this year.",
            Style::default().fg(Color::Yellow),
        ))],
    };

    let fields = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Song"));
    frame.render_widget(fields, area);
}

fn song_lines(song: &Song) -> Vec<Line<'static>> {
    let streams = format_streams(song.total_streams())
        .unwrap_or_else(|_| song.total_streams().to_string());
    let release_date = format!(
        "{}-{}-{}",
        song.released_year(),
        song.released_month(),
        song.released_day()
    );

    [
        ("Track Name:", song.track_name().to_string()),
        ("Artist(s):", song.artist_name().to_string()),
        ("Release Date:", release_date),
        ("Total Streams:", streams),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", label), Style::default().fg(Color::Cyan)),
            Span::raw(value),
        ])
    })
    .collect()
}

fn render_help(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let help = match app.notice {
        Some(notice) => {
            Paragraph::new(format!("  {}", notice)).style(Style::default().fg(Color::Yellow))
        }
        None => Paragraph::new("  \u{2190}/p Prev  \u{2192}/n Next  b Back  q Quit")
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(help.block(Block::default().borders(Borders::ALL)), area);
}
