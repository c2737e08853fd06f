//! Avatar Generator Library
//!
//! This library drives the compositor over a loaded catalog, either for every
//! combination of parts or for a single random pick saved under its own hash.

pub mod content_hash;
pub mod exhaustive;
pub mod progress_tracker;
pub mod random;

pub use exhaustive::{generate_all, ExhaustiveSummary};
pub use progress_tracker::ProgressTracker;
pub use random::{generate_random, RandomAvatar};

use std::path::{Path, PathBuf};

/// Result type for avatar-generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for avatar-generator operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Avatar core error: {0}")]
    Core(#[from] avatar_core::Error),

    #[error("Compositor error: {0}")]
    Compositor(#[from] avatar_compositor::Error),

    #[error("Resource unavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode avatar: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to persist {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    fn persistence(path: &Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Persistence {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the category-prefixed asset files
    pub assets_dir: PathBuf,
    /// Output directory for exhaustive generation
    pub all_dir: PathBuf,
    /// Output directory for random generation
    pub random_dir: PathBuf,
    /// Edge length of every generated avatar in pixels
    pub size: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("./assets/"),
            all_dir: PathBuf::from("./all/"),
            random_dir: PathBuf::from("./random/"),
            size: avatar_compositor::DEFAULT_SIZE,
        }
    }
}

/// Creates `dir` and its parents if they do not exist yet
fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Error::ResourceUnavailable {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod fixtures {
    use avatar_core::{Asset, Catalog, Category};
    use image::{Rgba, RgbaImage};

    /// Builds a catalog with `counts` assets per category, in layer order.
    /// Every asset covers a different region so each combination renders differently.
    pub fn catalog(counts: [usize; 4]) -> Catalog {
        let mut sequences = Category::LAYER_ORDER.iter().zip(counts).map(|(&category, count)| {
            (1..=count)
                .map(|ordinal| {
                    let mut image = RgbaImage::from_pixel(25, 25, Rgba([0, 0, 0, 0]));
                    let shade = (ordinal * 40) as u8;
                    let row = match category {
                        Category::Background => 0,
                        Category::Skin => 1,
                        Category::Eyes => 2,
                        Category::Mouth => 3,
                    };
                    image.put_pixel(ordinal as u32, row, Rgba([shade, 255 - shade, row as u8 * 60, 255]));
                    if category == Category::Background {
                        for pixel in image.pixels_mut().filter(|p| p[3] == 0) {
                            *pixel = Rgba([200, 200, 200, 255]);
                        }
                    }
                    Asset::new(category, ordinal, format!("{}{:02}.png", category.prefix(), ordinal), image)
                })
                .collect::<Vec<_>>()
        });

        let backgrounds = sequences.next().unwrap_or_default();
        let skins = sequences.next().unwrap_or_default();
        let eyes = sequences.next().unwrap_or_default();
        let mouths = sequences.next().unwrap_or_default();
        Catalog::new(backgrounds, skins, eyes, mouths)
    }
}
