use anyhow::Result;
use hitshelf_core::Catalog;

/// Print every song released in `year`.
pub fn list_songs(catalog: &Catalog, year: &str) -> Result<()> {
    print!("{}", songs_listing(catalog, year)?);
    Ok(())
}

fn songs_listing(catalog: &Catalog, year: &str) -> Result<String> {
    let Some(year_index) = catalog.index_of(year) else {
        return Ok(format!("The year {} doesn't exist in our data\n", year));
    };

    let songs = catalog.songs(year_index)?;
    let lines: String = songs.iter().map(|song| format!("  {}\n", song)).collect();
    Ok(format!("\n{}: {} songs\n\n{}", year, songs.len(), lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitshelf_core::Song;

    fn catalog() -> Catalog {
        let song = |t: &str| Song::new(t, "Sade", "1994", "2", "16", "1").unwrap();
        Catalog::from_buckets([("1994", vec![song("Smooth Operator"), song("Cherish the Day")])])
    }

    #[test]
    fn test_unknown_year_notice_printed_once() {
        let text = songs_listing(&catalog(), "1850").unwrap();
        assert_eq!(text, "The year 1850 doesn't exist in our data\n");
        assert_eq!(text.matches("doesn't exist").count(), 1);
    }

    #[test]
    fn test_songs_listing_sorted() {
        let text = songs_listing(&catalog(), "1994").unwrap();
        assert!(text.starts_with("\n1994: 2 songs\n\n  track name = Cherish the Day,"));
        assert!(text.ends_with("streams = 1\n"));
    }
}
