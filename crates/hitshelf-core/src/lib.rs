//! Core domain model for hitshelf.
//!
//! This crate defines the validated [`Song`] record, the year-bucketed
//! [`Catalog`] with its lookup operations, the CSV loader that feeds it, and
//! the navigation state used by display front-ends.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod browse;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;

pub use browse::{format_streams, Browser, Progress, Step};
pub use catalog::{Catalog, YearBucket};
pub use error::{Error, Result, ValidationError};
pub use loader::load_catalog;
pub use model::{ColumnLayout, Song, SongField};
