use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// The six fields of a [`Song`], in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SongField {
    TrackName,
    ArtistName,
    ReleasedYear,
    ReleasedMonth,
    ReleasedDay,
    TotalStreams,
}

impl SongField {
    pub const ALL: [Self; 6] = [
        Self::TrackName,
        Self::ArtistName,
        Self::ReleasedYear,
        Self::ReleasedMonth,
        Self::ReleasedDay,
        Self::TotalStreams,
    ];

    /// Human-readable name used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TrackName => "track name",
            Self::ArtistName => "artist name",
            Self::ReleasedYear => "release year",
            Self::ReleasedMonth => "release month",
            Self::ReleasedDay => "release day",
            Self::TotalStreams => "number of streams",
        }
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single chart track with its release date and Spotify stream count.
///
/// All fields are kept as text exactly as they appeared in the source data.
/// A `Song` can only be built through [`Song::new`], which rejects blank
/// fields, and it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Song {
    track_name: String,
    artist_name: String,
    released_year: String,
    released_month: String,
    released_day: String,
    total_streams: String,
}

impl Song {
    /// Build a validated song.
    ///
    /// Fields are checked in declaration order; the first blank one (empty or
    /// whitespace only) is reported.
    pub fn new(
        track_name: impl Into<String>,
        artist_name: impl Into<String>,
        released_year: impl Into<String>,
        released_month: impl Into<String>,
        released_day: impl Into<String>,
        total_streams: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let song = Self {
            track_name: track_name.into(),
            artist_name: artist_name.into(),
            released_year: released_year.into(),
            released_month: released_month.into(),
            released_day: released_day.into(),
            total_streams: total_streams.into(),
        };

        for field in SongField::ALL {
            if song.field(field).trim().is_empty() {
                return Err(ValidationError { field });
            }
        }

        Ok(song)
    }

    #[must_use]
    pub fn track_name(&self) -> &str {
        &self.track_name
    }

    #[must_use]
    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    #[must_use]
    pub fn released_year(&self) -> &str {
        &self.released_year
    }

    #[must_use]
    pub fn released_month(&self) -> &str {
        &self.released_month
    }

    #[must_use]
    pub fn released_day(&self) -> &str {
        &self.released_day
    }

    #[must_use]
    pub fn total_streams(&self) -> &str {
        &self.total_streams
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, field: SongField) -> &str {
        match field {
            SongField::TrackName => &self.track_name,
            SongField::ArtistName => &self.artist_name,
            SongField::ReleasedYear => &self.released_year,
            SongField::ReleasedMonth => &self.released_month,
            SongField::ReleasedDay => &self.released_day,
            SongField::TotalStreams => &self.total_streams,
        }
    }

    /// Order two songs by track name (byte-wise, case-sensitive).
    ///
    /// Songs with the same title compare `Equal` even when the other fields
    /// differ, so this is kept apart from `PartialEq`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.track_name.cmp(&other.track_name)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track name = {}, artist = {}, release year = {}, release month = {}, release day = {}, streams = {}",
            self.track_name,
            self.artist_name,
            self.released_year,
            self.released_month,
            self.released_day,
            self.total_streams
        )
    }
}
