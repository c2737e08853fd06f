//! Exhaustive generation of every part combination

use crate::{ensure_output_dir, Error, ProgressTracker, Result};
use avatar_compositor::{AvatarCompositor, AvatarParts};
use avatar_core::{Catalog, Category};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// How often progress is logged, in files
const REPORT_INTERVAL: u64 = 100;

/// Outcome of an exhaustive run
#[derive(Debug, Clone)]
pub struct ExhaustiveSummary {
    /// Number of avatar files written
    pub written: usize,
    /// Directory the avatars were written to
    pub output_dir: PathBuf,
}

/// File name for a combination, indices in skin, eyes, mouth, background order
pub fn avatar_file_name(skin: usize, eyes: usize, mouth: usize, background: usize) -> String {
    format!("avatar_{}{}{}{}.png", skin, eyes, mouth, background)
}

/// Renders every skin x eyes x mouth x background combination into `output_dir`.
///
/// Iteration is skin-outermost, background-innermost. Existing files with the
/// same names are overwritten; the first failure aborts the run.
pub fn generate_all<P: AsRef<Path>>(catalog: &Catalog, size: u32, output_dir: P) -> Result<ExhaustiveSummary> {
    let output_dir = output_dir.as_ref();
    catalog.ensure_complete()?;
    ensure_output_dir(output_dir)?;

    if let Some(category) = Category::LAYER_ORDER.into_iter().find(|&c| catalog.len(c) > 9) {
        tracing::warn!(
            %category,
            count = catalog.len(category),
            "Category has more than 9 assets, unpadded avatar names may collide"
        );
    }

    let total = catalog.combination_count();
    let compositor = AvatarCompositor::new(size);
    tracing::info!(
        total,
        size = compositor.size(),
        dir = %output_dir.display(),
        "Generating all avatar combinations"
    );

    let mut progress = ProgressTracker::new(total as u64, "Avatars");

    for skin in &catalog.skins {
        for eyes in &catalog.eyes {
            for mouth in &catalog.mouths {
                for background in &catalog.backgrounds {
                    let avatar = compositor.compose(&AvatarParts::new(background, skin, eyes, mouth))?;

                    let name = avatar_file_name(skin.ordinal, eyes.ordinal, mouth.ordinal, background.ordinal);
                    let path = output_dir.join(&name);
                    avatar
                        .save_with_format(&path, ImageFormat::Png)
                        .map_err(|e| Error::persistence(&path, e))?;

                    tracing::debug!(file = %name, "Saved avatar");
                    progress.increment_and_report(REPORT_INTERVAL);
                }
            }
        }
    }

    Ok(ExhaustiveSummary {
        written: progress.processed() as usize,
        output_dir: output_dir.to_path_buf(),
    })
}
