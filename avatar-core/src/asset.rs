//! Asset data structures for avatar parts

use image::RgbaImage;
use std::fmt;

/// The four fixed avatar part categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Background,
    Skin,
    Eyes,
    Mouth,
}

impl Category {
    /// Categories in compositing order, bottom layer first
    pub const LAYER_ORDER: [Category; 4] = [
        Category::Background,
        Category::Skin,
        Category::Eyes,
        Category::Mouth,
    ];

    /// Classifies a file name by its first character
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.chars().next().and_then(Self::from_prefix)
    }

    /// Maps a one-letter prefix to its category
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'B' => Some(Category::Background),
            'S' => Some(Category::Skin),
            'E' => Some(Category::Eyes),
            'M' => Some(Category::Mouth),
            _ => None,
        }
    }

    /// The file name prefix for this category
    pub fn prefix(self) -> char {
        match self {
            Category::Background => 'B',
            Category::Skin => 'S',
            Category::Eyes => 'E',
            Category::Mouth => 'M',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Background => "background",
            Category::Skin => "skin",
            Category::Eyes => "eyes",
            Category::Mouth => "mouth",
        };
        f.write_str(name)
    }
}

/// Represents a single decoded avatar part
#[derive(Debug, Clone)]
pub struct Asset {
    /// Category this asset belongs to
    pub category: Category,
    /// 1-based position within its category's load order
    pub ordinal: usize,
    /// File name the asset was loaded from
    pub name: String,
    /// Decoded RGBA pixels
    pub image: RgbaImage,
}

impl Asset {
    /// Creates a new asset
    pub fn new(category: Category, ordinal: usize, name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            category,
            ordinal,
            name: name.into(),
            image,
        }
    }

    /// Width of the asset in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the asset in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
