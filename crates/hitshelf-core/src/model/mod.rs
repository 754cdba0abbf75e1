pub mod layout;
pub mod song;

pub use layout::ColumnLayout;
pub use song::{Song, SongField};
