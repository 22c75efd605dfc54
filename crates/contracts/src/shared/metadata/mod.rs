//! Metadata for entity collections and their grid columns

pub mod types;

pub use types::*;
