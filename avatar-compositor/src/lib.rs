//! Avatar Compositor Library
//!
//! This library layers one asset of each category into a fixed-size avatar.

pub mod compositor;

pub use compositor::{AvatarCompositor, AvatarParts, DEFAULT_SIZE};

/// Result type for avatar-compositor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for avatar-compositor operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Composition error: {0}")]
    Composition(String),
}
