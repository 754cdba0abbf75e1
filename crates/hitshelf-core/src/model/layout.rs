use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::song::Song;

/// Column positions mapping a raw song row onto the six [`Song`] fields.
///
/// The default matches the public "Most Streamed Spotify Songs 2023" export:
///
/// | column | field |
/// |---|---|
/// | 0 | track name |
/// | 1 | artist(s) name |
/// | 3 | released year |
/// | 4 | released month |
/// | 5 | released day |
/// | 8 | streams |
///
/// Any other column is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub track_name: usize,
    pub artist_name: usize,
    pub released_year: usize,
    pub released_month: usize,
    pub released_day: usize,
    pub streams: usize,
}

impl ColumnLayout {
    pub const SPOTIFY_2023: Self = Self {
        track_name: 0,
        artist_name: 1,
        released_year: 3,
        released_month: 4,
        released_day: 5,
        streams: 8,
    };

    /// Minimum number of columns a row needs for this layout.
    #[must_use]
    pub fn width(&self) -> usize {
        [
            self.track_name,
            self.artist_name,
            self.released_year,
            self.released_month,
            self.released_day,
            self.streams,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
        .saturating_add(1)
    }

    /// Build a [`Song`] from a raw row.
    ///
    /// Rows narrower than [`width`](Self::width) are a configuration error;
    /// blank fields surface as [`Error::Validation`].
    pub fn song_from_row<S: AsRef<str>>(&self, row: &[S]) -> Result<Song> {
        if row.len() < self.width() {
            return Err(Error::Config(format!(
                "song row has {} columns, expected at least {}",
                row.len(),
                self.width()
            )));
        }

        let song = Song::new(
            column(row, self.track_name)?,
            column(row, self.artist_name)?,
            column(row, self.released_year)?,
            column(row, self.released_month)?,
            column(row, self.released_day)?,
            column(row, self.streams)?,
        )?;
        Ok(song)
    }
}

fn column<S: AsRef<str>>(row: &[S], idx: usize) -> Result<&str> {
    row.get(idx).map(|s| s.as_ref()).ok_or_else(|| {
        Error::Config(format!(
            "song row has {} columns, no column {}",
            row.len(),
            idx
        ))
    })
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::SPOTIFY_2023
    }
}
