pub mod browse;
pub mod config;
pub mod find;
pub mod songs;
pub mod years;

pub use browse::run_browse;
pub use find::find_track;
pub use songs::list_songs;
pub use years::list_years;
