use anyhow::Result;
use hitshelf_core::{format_streams, Catalog};

/// Print where `track` sits in the catalog.
pub fn find_track(catalog: &Catalog, track: &str) -> Result<()> {
    println!("{}", describe_track(catalog, track)?);
    Ok(())
}

fn describe_track(catalog: &Catalog, track: &str) -> Result<String> {
    let not_found = || format!("No song titled {:?} in the catalog", track);
    let (Some(year_index), Some(rank)) =
        (catalog.find_year_of_song(track), catalog.global_rank(track))
    else {
        return Ok(not_found());
    };

    let bucket = catalog.bucket(year_index)?;
    let Some(song) = bucket.songs().iter().find(|s| s.track_name() == track) else {
        return Ok(not_found());
    };
    let streams = format_streams(song.total_streams())
        .unwrap_or_else(|_| song.total_streams().to_string());

    Ok(format!(
        "{:?} was released in {} (song {} of {} overall)\n  by {}, {} streams",
        track,
        bucket.label(),
        rank,
        catalog.total_song_count(),
        song.artist_name(),
        streams
    ))
}
