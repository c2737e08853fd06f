//! Asset catalog discovery and loading

use crate::{Asset, Category, Error, Result};
use image::ImageReader;
use std::fs;
use std::path::Path;

/// The decoded avatar parts, one ordered sequence per category
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Background layers
    pub backgrounds: Vec<Asset>,
    /// Skin layers
    pub skins: Vec<Asset>,
    /// Eye layers
    pub eyes: Vec<Asset>,
    /// Mouth layers
    pub mouths: Vec<Asset>,
}

impl Catalog {
    /// Creates a catalog from already decoded sequences
    pub fn new(
        backgrounds: Vec<Asset>,
        skins: Vec<Asset>,
        eyes: Vec<Asset>,
        mouths: Vec<Asset>,
    ) -> Self {
        Self {
            backgrounds,
            skins,
            eyes,
            mouths,
        }
    }

    /// Scans `dir` and decodes every classified asset in enumeration order.
    ///
    /// Hidden entries and anything that is not a file are skipped. Files whose
    /// first character matches no category are logged and left out.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let unavailable = |source| Error::ResourceUnavailable {
            path: dir.to_path_buf(),
            source,
        };

        let mut catalog = Self::default();

        for entry in fs::read_dir(dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if name.starts_with('.') || !path.is_file() {
                continue;
            }

            let Some(category) = Category::from_file_name(&name) else {
                tracing::warn!(
                    file = %path.display(),
                    "Asset name matches no category prefix (B, S, E, M), skipping"
                );
                continue;
            };

            let image = decode_asset(&path)?;
            let sequence = catalog.sequence_mut(category);
            let ordinal = sequence.len() + 1;

            tracing::debug!(
                file = %name,
                %category,
                ordinal,
                width = image.width(),
                height = image.height(),
                "Loaded asset"
            );
            sequence.push(Asset::new(category, ordinal, name, image));
        }

        if catalog.is_empty() {
            tracing::warn!(dir = %dir.display(), "No assets found in the assets directory");
        }

        tracing::info!(
            dir = %dir.display(),
            backgrounds = catalog.backgrounds.len(),
            skins = catalog.skins.len(),
            eyes = catalog.eyes.len(),
            mouths = catalog.mouths.len(),
            "Loaded asset catalog"
        );

        Ok(catalog)
    }

    /// Gets the sequence for a category
    pub fn sequence(&self, category: Category) -> &[Asset] {
        match category {
            Category::Background => &self.backgrounds,
            Category::Skin => &self.skins,
            Category::Eyes => &self.eyes,
            Category::Mouth => &self.mouths,
        }
    }

    fn sequence_mut(&mut self, category: Category) -> &mut Vec<Asset> {
        match category {
            Category::Background => &mut self.backgrounds,
            Category::Skin => &mut self.skins,
            Category::Eyes => &mut self.eyes,
            Category::Mouth => &mut self.mouths,
        }
    }

    /// Number of assets loaded for a category
    pub fn len(&self, category: Category) -> usize {
        self.sequence(category).len()
    }

    /// Returns true if no asset of any category was loaded
    pub fn is_empty(&self) -> bool {
        Category::LAYER_ORDER.iter().all(|&c| self.len(c) == 0)
    }

    /// Number of distinct avatars the catalog can produce
    pub fn combination_count(&self) -> usize {
        Category::LAYER_ORDER.iter().map(|&c| self.len(c)).product()
    }

    /// Fails with the first category that has no assets
    pub fn ensure_complete(&self) -> Result<()> {
        match Category::LAYER_ORDER.into_iter().find(|&c| self.len(c) == 0) {
            Some(category) => Err(Error::EmptyCategory(category)),
            None => Ok(()),
        }
    }
}

/// Decodes a file into RGBA pixels, guessing the format from its content
fn decode_asset(path: &Path) -> Result<image::RgbaImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let image = reader.decode().map_err(|source| Error::AssetDecode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, color: [u8; 4]) {
        RgbaImage::from_pixel(4, 4, Rgba(color))
            .save(dir.join(name))
            .unwrap();
    }

    fn write_full_set(dir: &Path) {
        write_png(dir, "BG01.png", [255, 0, 0, 255]);
        write_png(dir, "SK01.png", [0, 255, 0, 255]);
        write_png(dir, "EY01.png", [0, 0, 255, 255]);
        write_png(dir, "MO01.png", [0, 0, 0, 128]);
    }

    #[test]
    fn test_load_one_asset_per_category() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());

        let catalog = Catalog::load(dir.path()).unwrap();

        assert!(!catalog.is_empty());
        for category in Category::LAYER_ORDER {
            let sequence = catalog.sequence(category);
            assert_eq!(sequence.len(), 1);
            assert_eq!(sequence[0].category, category);
            assert_eq!(sequence[0].ordinal, 1);
        }
        assert_eq!(catalog.combination_count(), 1);
        assert!(catalog.ensure_complete().is_ok());
    }

    #[test]
    fn test_unrecognized_prefix_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());
        write_png(dir.path(), "X01.png", [9, 9, 9, 255]);

        let catalog = Catalog::load(dir.path()).unwrap();

        for category in Category::LAYER_ORDER {
            assert_eq!(catalog.len(category), 1);
        }
    }

    #[test]
    fn test_hidden_and_directory_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());
        write_png(dir.path(), ".BG02.png", [1, 2, 3, 255]);
        fs::create_dir(dir.path().join("Backup")).unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();

        assert_eq!(catalog.len(Category::Background), 1);
        assert_eq!(catalog.backgrounds[0].name, "BG01.png");
    }

    #[test]
    fn test_ordinals_follow_load_order() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());
        write_png(dir.path(), "SK02.png", [0, 128, 0, 255]);
        write_png(dir.path(), "SK03.png", [0, 64, 0, 255]);

        let catalog = Catalog::load(dir.path()).unwrap();

        let ordinals: Vec<usize> = catalog.skins.iter().map(|a| a.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(catalog.combination_count(), 3);
    }

    #[test]
    fn test_missing_skin_fails_completeness() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "BG01.png", [255, 0, 0, 255]);
        write_png(dir.path(), "EY01.png", [0, 0, 255, 255]);
        write_png(dir.path(), "MO01.png", [0, 0, 0, 255]);

        let catalog = Catalog::load(dir.path()).unwrap();

        assert_eq!(catalog.combination_count(), 0);
        assert!(matches!(
            catalog.ensure_complete(),
            Err(Error::EmptyCategory(Category::Skin))
        ));
    }

    #[test]
    fn test_directory_without_assets_is_empty() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "X01.png", [9, 9, 9, 255]);

        let catalog = Catalog::load(dir.path()).unwrap();

        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.ensure_complete(),
            Err(Error::EmptyCategory(Category::Background))
        ));
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-assets");

        let result = Catalog::load(&missing);

        assert!(matches!(result, Err(Error::ResourceUnavailable { .. })));
    }

    #[test]
    fn test_corrupt_asset_aborts_load() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());
        fs::write(dir.path().join("MO02.png"), b"definitely not a png").unwrap();

        let result = Catalog::load(dir.path());

        assert!(matches!(result, Err(Error::AssetDecode { .. })));
    }

    #[test]
    fn test_assets_are_converted_to_rgba() {
        let dir = TempDir::new().unwrap();
        write_full_set(dir.path());
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .save(dir.path().join("BG02.png"))
            .unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();

        let rgb = catalog
            .backgrounds
            .iter()
            .find(|a| a.name == "BG02.png")
            .unwrap();
        assert_eq!((rgb.width(), rgb.height()), (3, 2));
        assert_eq!(rgb.image.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }
}
