use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use hitshelf_core::{Browser, Catalog};
use ratatui::prelude::*;

pub mod song_detail;
pub mod year_list;

/// Which view the TUI is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    YearList,
    SongDetail,
}

/// Application state for the browser TUI.
#[derive(Debug)]
pub struct App<'a> {
    pub view: View,
    pub browser: Browser<'a>,
    pub selected_year: usize,
    pub year_list_offset: usize, // First visible year in the list
    /// Message from the last navigation step that did not move.
    pub notice: Option<&'static str>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            view: View::YearList,
            browser: Browser::new(catalog),
            selected_year: 0,
            year_list_offset: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.browser.catalog()
    }

    fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;
        match self.view {
            View::YearList => self.handle_year_list_key(key),
            View::SongDetail => self.handle_song_detail_key(key),
        }
    }

    fn handle_year_list_key(&mut self, key: KeyCode) {
        // Assume reasonable viewport height (will be refined in render)
        const VIEWPORT_HEIGHT: usize = 20;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected_year + 1 < self.catalog().year_count() {
                    self.selected_year += 1;
                    if self.selected_year >= self.year_list_offset + VIEWPORT_HEIGHT {
                        self.year_list_offset = self.selected_year - VIEWPORT_HEIGHT + 1;
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected_year > 0 {
                    self.selected_year -= 1;
                    if self.selected_year < self.year_list_offset {
                        self.year_list_offset = self.selected_year;
                    }
                }
            }
            KeyCode::Enter => {
                if self.browser.select_year(self.selected_year).is_ok() {
                    self.view = View::SongDetail;
                }
            }
            _ => {}
        }
    }

    fn handle_song_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => {
                self.view = View::YearList;
            }
            KeyCode::Char('n' | 'j') | KeyCode::Down | KeyCode::Right => {
                self.notice = self.browser.next_song().notice();
            }
            KeyCode::Char('p' | 'k') | KeyCode::Up | KeyCode::Left => {
                self.notice = self.browser.prev_song().notice();
            }
            _ => {}
        }
    }
}

/// Run the browser TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(catalog: &Catalog) -> Result<()> {
    if catalog.year_count() == 0 {
        println!("The catalog has no release years to browse.");
        return Ok(());
    }

    let app = App::new(catalog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app);

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| match app.view {
            View::YearList => year_list::render(frame, &app),
            View::SongDetail => song_detail::render(frame, &app),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
