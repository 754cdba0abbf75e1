//! The year-bucketed song catalog.
//!
//! A [`Catalog`] is built once from two row sources: a year table declaring
//! how many songs each release year holds, and a flat song table whose rows
//! fill those years in order. Every constructor sorts each year by track name
//! before returning, so callers only ever see sorted buckets.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ColumnLayout, Song};

/// The songs released in one year, in track-name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    label: String,
    songs: Vec<Song>,
}

impl YearBucket {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Songs grouped by release year.
///
/// Bucket membership is fixed at construction; the only reordering ever
/// applied is the per-bucket sort done before the catalog is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    buckets: Vec<YearBucket>,
}

impl Catalog {
    /// Build a catalog from already-constructed `(label, songs)` groups.
    ///
    /// No year-table rules apply here: the groups are taken as given, so an
    /// empty iterator yields a catalog with no years. Loading from files goes
    /// through [`from_rows`](Self::from_rows), which requires at least one.
    pub fn from_buckets<I, L>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<Song>)>,
        L: Into<String>,
    {
        let mut catalog = Self {
            buckets: buckets
                .into_iter()
                .map(|(label, songs)| YearBucket {
                    label: label.into(),
                    songs,
                })
                .collect(),
        };
        catalog.sort_all();
        catalog
    }

    /// Build a catalog from raw year-table and song-table rows.
    ///
    /// `year_rows` starts with a single-column row holding the number of
    /// years, followed by exactly that many `(label, song count)` rows.
    /// `song_rows` must hold exactly as many rows as the declared counts add
    /// up to; they are assigned to years in order and mapped to songs through
    /// `layout`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the year count is not a positive integer, a year
    /// row is malformed, the number of year rows differs from the declared
    /// count, or the number of song rows differs from the declared total.
    /// [`Error::Validation`] if a song row has a blank field.
    pub fn from_rows<Y, S>(year_rows: Y, song_rows: S, layout: &ColumnLayout) -> Result<Self>
    where
        Y: IntoIterator,
        Y::Item: AsRef<[String]>,
        S: IntoIterator,
        S::Item: AsRef<[String]>,
    {
        let declared = parse_year_table(year_rows)?;
        let expected: usize = declared.iter().map(|(_, count)| count).sum();

        let mut rows = song_rows.into_iter().enumerate();
        let mut buckets = Vec::with_capacity(declared.len());
        let mut consumed = 0usize;

        for (label, count) in declared {
            let mut songs = Vec::with_capacity(count);
            for _ in 0..count {
                let Some((row_idx, row)) = rows.next() else {
                    return Err(Error::Config(format!(
                        "song table has {} rows, but the year table declares {}",
                        consumed, expected
                    )));
                };
                let song = layout.song_from_row(row.as_ref()).map_err(|e| {
                    log::error!("Rejected song row {}: {}", row_idx + 1, e);
                    e
                })?;
                songs.push(song);
                consumed += 1;
            }
            log::debug!("Year {}: {} songs", label, songs.len());
            buckets.push((label, songs));
        }

        let extra = rows.count();
        if extra > 0 {
            return Err(Error::Config(format!(
                "song table has {} rows, but the year table declares {}",
                consumed + extra,
                expected
            )));
        }

        Ok(Self::from_buckets(buckets))
    }

    /// Number of year buckets.
    #[must_use]
    pub fn year_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of songs in the year at `year_index`.
    pub fn song_count(&self, year_index: usize) -> Result<usize> {
        Ok(self.bucket(year_index)?.len())
    }

    /// Number of songs across all years.
    #[must_use]
    pub fn total_song_count(&self) -> usize {
        self.buckets.iter().map(YearBucket::len).sum()
    }

    /// Number of songs in the year labelled `label`.
    ///
    /// Unlike [`song_count`](Self::song_count), an unknown year is not an
    /// error: `0` is returned and the notice "The year ... doesn't exist in
    /// our data" is emitted as a `log::warn!` record.
    #[must_use]
    pub fn song_count_for_year(&self, label: &str) -> usize {
        match self.index_of(label) {
            Some(idx) => self.buckets[idx].len(),
            None => {
                log::warn!("The year {:?} doesn't exist in our data", label);
                0
            }
        }
    }

    /// Label of the year at `year_index`.
    pub fn year_label(&self, year_index: usize) -> Result<&str> {
        Ok(self.bucket(year_index)?.label())
    }

    /// The song at `song_index` within the year at `year_index`.
    pub fn song(&self, year_index: usize, song_index: usize) -> Result<&Song> {
        let bucket = self.bucket(year_index)?;
        bucket.songs.get(song_index).ok_or(Error::SongIndex {
            year_index,
            index: song_index,
            count: bucket.len(),
        })
    }

    /// An owned copy of every song in the year at `year_index`.
    pub fn songs(&self, year_index: usize) -> Result<Vec<Song>> {
        Ok(self.bucket(year_index)?.songs.clone())
    }

    /// Borrow the bucket at `year_index`.
    pub fn bucket(&self, year_index: usize) -> Result<&YearBucket> {
        self.buckets.get(year_index).ok_or(Error::YearIndex {
            index: year_index,
            count: self.buckets.len(),
        })
    }

    /// All year buckets in stored order.
    #[must_use]
    pub fn buckets(&self) -> &[YearBucket] {
        &self.buckets
    }

    /// Index of the first year whose label equals `label` exactly.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.buckets.iter().position(|b| b.label == label)
    }

    /// 1-based position of the first song titled `track_name`, counting
    /// through every year in stored order.
    #[must_use]
    pub fn global_rank(&self, track_name: &str) -> Option<usize> {
        self.iter()
            .position(|song| song.track_name() == track_name)
            .map(|pos| pos + 1)
    }

    /// Index of the first year containing a song titled `track_name`.
    #[must_use]
    pub fn find_year_of_song(&self, track_name: &str) -> Option<usize> {
        self.buckets
            .iter()
            .position(|b| b.songs.iter().any(|s| s.track_name() == track_name))
    }

    /// Every year label, index-aligned with the buckets.
    #[must_use]
    pub fn release_year_labels(&self) -> Vec<&str> {
        self.buckets.iter().map(YearBucket::label).collect()
    }

    /// Iterate every song, year by year.
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.buckets.iter().flat_map(|b| b.songs.iter())
    }

    /// Sort every bucket by track name. The sort is stable, so songs sharing
    /// a title keep their input order.
    fn sort_all(&mut self) {
        for bucket in &mut self.buckets {
            bucket.songs.sort_by(Song::compare);
        }
    }
}

/// Parse the year table into `(label, declared song count)` pairs.
fn parse_year_table<Y>(year_rows: Y) -> Result<Vec<(String, usize)>>
where
    Y: IntoIterator,
    Y::Item: AsRef<[String]>,
{
    let mut rows = year_rows.into_iter();

    let first = rows
        .next()
        .ok_or_else(|| Error::Config("year table is empty".to_string()))?;
    let raw_count = first.as_ref().first().map(String::as_str).unwrap_or("");
    let year_count = match raw_count.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(Error::Config(format!(
                "year count must be a positive integer, got {:?}",
                raw_count
            )))
        }
    };

    let mut declared = Vec::with_capacity(year_count);
    for row in rows {
        let row = row.as_ref();
        if declared.len() == year_count {
            return Err(Error::Config(format!(
                "year table has more than the {} declared years",
                year_count
            )));
        }
        let [label, count, ..] = row else {
            return Err(Error::Config(format!(
                "year row {} needs a label and a song count",
                declared.len() + 1
            )));
        };
        let count = count.trim().parse::<usize>().map_err(|_| {
            Error::Config(format!("invalid song count {:?} for year {:?}", count, label))
        })?;
        declared.push((label.clone(), count));
    }

    if declared.len() < year_count {
        return Err(Error::Config(format!(
            "year table declares {} years but lists {}",
            year_count,
            declared.len()
        )));
    }

    Ok(declared)
}
