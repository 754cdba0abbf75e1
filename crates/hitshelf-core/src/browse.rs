//! Navigation state for front-ends that page through a [`Catalog`] one song
//! at a time.

use std::fmt;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::Song;

/// Outcome of a [`Browser::next_song`] or [`Browser::prev_song`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// Already on the first song of the year.
    AtFirst,
    /// Already on the last song of the year.
    AtLast,
    /// No year has been selected yet.
    NoSelection,
}

impl Step {
    /// Notice to show the user when the step did not move.
    #[must_use]
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::Moved => None,
            Self::AtFirst => Some("This is the first song for this year."),
            Self::AtLast => Some("This is the last song for this year."),
            Self::NoSelection => Some("Select a year first."),
        }
    }
}

/// Where the current song sits among all songs of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based global rank of the current track.
    pub rank: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.rank as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% | {} of {} total songs",
            self.percent(),
            self.rank,
            self.total
        )
    }
}

/// Cursor over a read-only catalog: a selected year and a song within it.
#[derive(Debug, Clone)]
pub struct Browser<'a> {
    catalog: &'a Catalog,
    year: Option<usize>,
    song: usize,
}

impl<'a> Browser<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            year: None,
            song: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Select the year at `year_index` and rewind to its first song.
    pub fn select_year(&mut self, year_index: usize) -> Result<()> {
        self.catalog.bucket(year_index)?;
        self.year = Some(year_index);
        self.song = 0;
        Ok(())
    }

    /// Select a year by label. Returns the selected index, or `None` (leaving
    /// the selection unchanged) if no year has that label.
    pub fn select_year_label(&mut self, label: &str) -> Option<usize> {
        let idx = self.catalog.index_of(label)?;
        self.year = Some(idx);
        self.song = 0;
        Some(idx)
    }

    #[must_use]
    pub fn year(&self) -> Option<usize> {
        self.year
    }

    #[must_use]
    pub fn song_index(&self) -> usize {
        self.song
    }

    /// The song under the cursor, if a non-empty year is selected.
    #[must_use]
    pub fn current(&self) -> Option<&'a Song> {
        let year = self.year?;
        self.catalog.song(year, self.song).ok()
    }

    pub fn next_song(&mut self) -> Step {
        let Some(len) = self.year_len() else {
            return Step::NoSelection;
        };
        if self.song + 1 >= len {
            return Step::AtLast;
        }
        self.song += 1;
        Step::Moved
    }

    pub fn prev_song(&mut self) -> Step {
        if self.year.is_none() {
            return Step::NoSelection;
        }
        if self.song == 0 {
            return Step::AtFirst;
        }
        self.song -= 1;
        Step::Moved
    }

    /// 1-based position of the current song and the size of its year.
    #[must_use]
    pub fn position_in_year(&self) -> Option<(usize, usize)> {
        self.current()?;
        Some((self.song + 1, self.year_len()?))
    }

    /// Global rank of the current track among all songs.
    #[must_use]
    pub fn overall_progress(&self) -> Option<Progress> {
        let song = self.current()?;
        let rank = self.catalog.global_rank(song.track_name())?;
        Some(Progress {
            rank,
            total: self.catalog.total_song_count(),
        })
    }

    /// Window title for the current position, e.g. `Songs | 3 of 12 songs`.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let (pos, len) = self.position_in_year()?;
        Some(format!("Songs | {} of {} songs", pos, len))
    }

    fn year_len(&self) -> Option<usize> {
        self.catalog.song_count(self.year?).ok()
    }
}

/// Group the digits of a stream count with commas: `"338003491"` becomes
/// `"338,003,491"`.
///
/// Leading zeros are dropped. Anything other than ASCII digits is rejected.
pub fn format_streams(streams: &str) -> Result<String> {
    if streams.is_empty() || !streams.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Streams(streams.to_string()));
    }
    let value: u128 = streams
        .parse()
        .map_err(|_| Error::Streams(streams.to_string()))?;

    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(track: &str) -> Song {
        Song::new(track, "Artist", "2000", "1", "1", "1").unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_buckets([
            ("1999", vec![song("B"), song("A")]),
            ("2000", vec![]),
            ("2001", vec![song("C"), song("E"), song("D")]),
        ])
    }

    #[test]
    fn test_new_browser_has_no_selection() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        assert_eq!(browser.year(), None);
        assert!(browser.current().is_none());
        assert_eq!(browser.next_song(), Step::NoSelection);
        assert_eq!(browser.prev_song(), Step::NoSelection);
        assert!(browser.title().is_none());
    }

    #[test]
    fn test_navigation_within_year() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        browser.select_year(2).unwrap();

        assert_eq!(browser.current().unwrap().track_name(), "C");
        assert_eq!(browser.prev_song(), Step::AtFirst);
        assert_eq!(browser.next_song(), Step::Moved);
        assert_eq!(browser.next_song(), Step::Moved);
        assert_eq!(browser.current().unwrap().track_name(), "E");
        assert_eq!(browser.next_song(), Step::AtLast);
        assert_eq!(browser.position_in_year(), Some((3, 3)));
        assert_eq!(browser.title().unwrap(), "Songs | 3 of 3 songs");
    }

    #[test]
    fn test_select_year_resets_cursor() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        browser.select_year(2).unwrap();
        browser.next_song();
        assert_eq!(browser.select_year_label("1999"), Some(0));
        assert_eq!(browser.song_index(), 0);
        assert_eq!(browser.current().unwrap().track_name(), "A");
    }

    #[test]
    fn test_select_invalid_year() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        assert!(browser.select_year(3).unwrap_err().is_index_error());
        assert_eq!(browser.select_year_label("1850"), None);
        assert_eq!(browser.year(), None);
    }

    #[test]
    fn test_empty_year() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        browser.select_year(1).unwrap();
        assert!(browser.current().is_none());
        assert_eq!(browser.next_song(), Step::AtLast);
        assert_eq!(browser.prev_song(), Step::AtFirst);
        assert!(browser.position_in_year().is_none());
        assert!(browser.overall_progress().is_none());
    }

    #[test]
    fn test_overall_progress() {
        let catalog = catalog();
        let mut browser = Browser::new(&catalog);
        browser.select_year(2).unwrap();
        browser.next_song();

        let progress = browser.overall_progress().unwrap();
        assert_eq!(progress, Progress { rank: 4, total: 5 });
        assert_eq!(progress.to_string(), "80.00% | 4 of 5 total songs");
    }

    #[test]
    fn test_step_notices() {
        assert_eq!(Step::Moved.notice(), None);
        assert_eq!(
            Step::AtLast.notice(),
            Some("This is the last song for this year.")
        );
    }

    #[test]
    fn test_format_streams() {
        assert_eq!(format_streams("338003491").unwrap(), "338,003,491");
        assert_eq!(format_streams("3703895074").unwrap(), "3,703,895,074");
        assert_eq!(format_streams("999").unwrap(), "999");
        assert_eq!(format_streams("1000").unwrap(), "1,000");
        assert_eq!(format_streams("0").unwrap(), "0");
        assert_eq!(format_streams("000123").unwrap(), "123");
    }

    #[test]
    fn test_format_streams_rejects_non_digits() {
        for bad in ["", "12a", "-5", "1,000", " 12"] {
            assert!(matches!(format_streams(bad), Err(Error::Streams(_))));
        }
    }
}
