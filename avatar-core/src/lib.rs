//! Avatar Core Library
//!
//! This library provides the asset categories, decoded assets and the
//! catalog loader shared by the compositor and the generators.

pub mod asset;
pub mod catalog;

pub use asset::{Asset, Category};
pub use catalog::Catalog;

use std::path::PathBuf;

/// Result type for avatar-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for avatar-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource unavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode asset {}: {source}", path.display())]
    AssetDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No {0} assets found in the catalog")]
    EmptyCategory(Category),
}
