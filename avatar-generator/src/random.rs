//! Random avatar generation with content-addressed file names

use crate::{content_hash, ensure_output_dir, Error, Result};
use avatar_compositor::{AvatarCompositor, AvatarParts};
use avatar_core::{Asset, Catalog};
use image::{ImageFormat, RgbaImage};
use rand::Rng;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// 1-based ordinals of the parts drawn for a random avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picks {
    pub background: usize,
    pub skin: usize,
    pub eyes: usize,
    pub mouth: usize,
}

/// A saved random avatar
#[derive(Debug, Clone)]
pub struct RandomAvatar {
    /// The composited pixels
    pub image: RgbaImage,
    /// Lowercase hex SHA-1 of the saved file
    pub hash: String,
    /// Final location, `avatar_<hash>.png` inside the output directory
    pub path: PathBuf,
    /// Which asset of each category was used
    pub picks: Picks,
}

/// Picks one asset of each category uniformly at random and saves the result
/// as `avatar_<sha1>.png` in `output_dir`.
///
/// The PNG is written to a temporary file first, hashed once complete and then
/// renamed, so the final name never refers to a partial file. An existing
/// avatar with identical content is replaced.
pub fn generate_random<P, R>(catalog: &Catalog, size: u32, output_dir: P, rng: &mut R) -> Result<RandomAvatar>
where
    P: AsRef<Path>,
    R: Rng,
{
    let output_dir = output_dir.as_ref();
    catalog.ensure_complete()?;

    let background = pick(&catalog.backgrounds, rng);
    let skin = pick(&catalog.skins, rng);
    let eyes = pick(&catalog.eyes, rng);
    let mouth = pick(&catalog.mouths, rng);
    let picks = Picks {
        background: background.ordinal,
        skin: skin.ordinal,
        eyes: eyes.ordinal,
        mouth: mouth.ordinal,
    };
    tracing::debug!(?picks, "Drew random parts");

    let image = AvatarCompositor::new(size).compose(&AvatarParts::new(background, skin, eyes, mouth))?;

    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(Error::Encode)?;

    ensure_output_dir(output_dir)?;
    let (hash, path) = persist_content_addressed(&encoded, output_dir)?;
    tracing::info!(%hash, file = %path.display(), "Saved random avatar");

    Ok(RandomAvatar {
        image,
        hash,
        path,
        picks,
    })
}

/// Draws a uniformly distributed element of a non-empty sequence
fn pick<'a, R: Rng>(assets: &'a [Asset], rng: &mut R) -> &'a Asset {
    &assets[rng.random_range(0..assets.len())]
}

/// Writes `bytes` to a temporary file in `dir`, hashes the file and renames it
/// to `avatar_<hash>.png`. The temporary file is removed on every failure path.
fn persist_content_addressed(bytes: &[u8], dir: &Path) -> Result<(String, PathBuf)> {
    let mut temp = tempfile::Builder::new()
        .prefix("avatar_random")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::persistence(dir, e))?;

    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| Error::persistence(temp.path(), e))?;

    let hash = content_hash::sha1_hex_file(temp.path()).map_err(|e| Error::persistence(temp.path(), e))?;

    let path = dir.join(format!("avatar_{}.png", hash));
    temp.persist(&path).map_err(|e| Error::persistence(&path, e.error))?;

    Ok((hash, path))
}
