use anyhow::Result;
use hitshelf_core::Catalog;

/// Run the interactive year/song browser.
pub fn run_browse(catalog: &Catalog) -> Result<()> {
    crate::tui::run_tui(catalog)
}
