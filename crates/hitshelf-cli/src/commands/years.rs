use anyhow::Result;
use hitshelf_core::Catalog;
use serde_json::json;

/// Print every release year with its song count.
pub fn list_years(catalog: &Catalog, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&years_json(catalog))?);
    } else {
        print!("{}", years_table(catalog));
    }
    Ok(())
}

fn years_json(catalog: &Catalog) -> serde_json::Value {
    let years: Vec<_> = catalog
        .buckets()
        .iter()
        .map(|bucket| json!({ "year": bucket.label(), "songs": bucket.len() }))
        .collect();
    json!({
        "years": years,
        "total_songs": catalog.total_song_count(),
    })
}

fn years_table(catalog: &Catalog) -> String {
    let rows: String = catalog
        .buckets()
        .iter()
        .map(|bucket| format!("  {:<8}  {:>5}\n", bucket.label(), bucket.len()))
        .collect();
    format!(
        "  Year      Songs\n{}\n  {} songs across {} years\n",
        rows,
        catalog.total_song_count(),
        catalog.year_count()
    )
}
