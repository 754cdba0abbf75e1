//! Reads the two delimited source files and hands their rows to
//! [`Catalog::from_rows`].
//!
//! The year file looks like:
//!
//! ```text
//! 3
//! released_year,count
//! 1994,2
//! 2001,1
//! 2023,3
//! ```
//!
//! and the song file is a headed CSV whose columns are described by a
//! [`ColumnLayout`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::ColumnLayout;

/// Raw fields of one delimited line.
pub type Row = Vec<String>;

/// Read every record from a delimited source.
///
/// No header handling is done here. Records may have differing widths, and
/// fields that are not valid UTF-8 are decoded lossily.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(rows)
}

/// Read every record from the file at `path`.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)?;
    read_rows_from(file)
}

/// Drop the column header that follows the year-count line.
pub fn year_table_rows(mut rows: Vec<Row>) -> Vec<Row> {
    if rows.len() > 1 {
        rows.remove(1);
    }
    rows
}

/// Drop the column header of the song table.
pub fn song_table_rows(mut rows: Vec<Row>) -> Vec<Row> {
    if !rows.is_empty() {
        rows.remove(0);
    }
    rows
}

/// Load, validate and sort a catalog from the year and song files.
pub fn load_catalog(
    years_path: &Path,
    songs_path: &Path,
    layout: &ColumnLayout,
) -> Result<Catalog> {
    log::info!(
        "Loading catalog from {} and {}",
        years_path.display(),
        songs_path.display()
    );

    let years = year_table_rows(read_rows(years_path)?);
    let songs = song_table_rows(read_rows(songs_path)?);
    log::debug!("Read {} year rows and {} song rows", years.len(), songs.len());

    let catalog = Catalog::from_rows(years, songs, layout)?;
    log::info!(
        "Loaded {} songs across {} years",
        catalog.total_song_count(),
        catalog.year_count()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_flexible_width() {
        let rows = read_rows_from("3\nreleased_year,count\n1994,2\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["3"]);
        assert_eq!(rows[2], vec!["1994", "2"]);
    }

    #[test]
    fn test_read_rows_quoted_fields() {
        let rows = read_rows_from("\"Hey, Ya!\",\"OutKast\"\n".as_bytes()).unwrap();
        assert_eq!(rows[0], vec!["Hey, Ya!", "OutKast"]);
    }

    #[test]
    fn test_read_rows_lossy_decoding() {
        // "Beyonc\xe9" in Latin-1
        let bytes: &[u8] = b"Halo,Beyonc\xe9\n";
        let rows = read_rows_from(bytes).unwrap();
        assert_eq!(rows[0][0], "Halo");
        assert!(rows[0][1].starts_with("Beyonc"));
    }

    #[test]
    fn test_year_table_drops_header() {
        let rows = vec![
            vec!["2".to_string()],
            vec!["year".into(), "count".into()],
            vec!["1994".into(), "1".into()],
        ];
        let rows = year_table_rows(rows);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "1994");
    }

    #[test]
    fn test_song_table_drops_header() {
        assert!(song_table_rows(Vec::new()).is_empty());
        let rows = song_table_rows(vec![vec!["track_name".to_string()], vec!["A".to_string()]]);
        assert_eq!(rows, vec![vec!["A".to_string()]]);
    }
}
