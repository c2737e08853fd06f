//! Compositor for layering avatar parts

use crate::{Error, Result};
use avatar_core::{Asset, Category};
use image::{Rgba, RgbaImage};

/// Default edge length of a generated avatar in pixels
pub const DEFAULT_SIZE: u32 = 25;

/// One asset per category, borrowed from a catalog
#[derive(Debug, Clone, Copy)]
pub struct AvatarParts<'a> {
    pub background: &'a Asset,
    pub skin: &'a Asset,
    pub eyes: &'a Asset,
    pub mouth: &'a Asset,
}

impl<'a> AvatarParts<'a> {
    /// Creates a new set of parts
    pub fn new(background: &'a Asset, skin: &'a Asset, eyes: &'a Asset, mouth: &'a Asset) -> Self {
        Self {
            background,
            skin,
            eyes,
            mouth,
        }
    }

    /// Returns the parts bottom layer first
    pub fn layers(&self) -> [&'a Asset; 4] {
        [self.background, self.skin, self.eyes, self.mouth]
    }
}

/// Compositor that renders square avatars of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct AvatarCompositor {
    size: u32,
}

impl Default for AvatarCompositor {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl AvatarCompositor {
    /// Creates a compositor producing `size` x `size` avatars
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Edge length of the avatars this compositor produces
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Composites background, skin, eyes and mouth, in that order, onto a
    /// transparent canvas. Every layer is anchored at the origin.
    pub fn compose(&self, parts: &AvatarParts<'_>) -> Result<RgbaImage> {
        if self.size == 0 {
            return Err(Error::Composition("avatar size must be non-zero".into()));
        }

        let mut canvas = RgbaImage::new(self.size, self.size);

        for (expected, layer) in Category::LAYER_ORDER.into_iter().zip(parts.layers()) {
            if layer.category != expected {
                return Err(Error::Composition(format!(
                    "{} asset '{}' given in the {} slot",
                    layer.category, layer.name, expected
                )));
            }
            overlay_image(&mut canvas, &layer.image);
        }

        Ok(canvas)
    }
}

/// Alpha-composites `overlay` over `base` at the origin, clipping to `base`
fn overlay_image(base: &mut RgbaImage, overlay: &RgbaImage) {
    let width = base.width().min(overlay.width());
    let height = base.height().min(overlay.height());

    for y in 0..height {
        for x in 0..width {
            let source = *overlay.get_pixel(x, y);
            let dest = *base.get_pixel(x, y);
            base.put_pixel(x, y, source_over(source, dest));
        }
    }
}

/// Porter-Duff "source over" on straight (non-premultiplied) alpha
fn source_over(source: Rgba<u8>, dest: Rgba<u8>) -> Rgba<u8> {
    match source[3] {
        0 => return dest,
        255 => return source,
        _ => {}
    }

    let src_alpha = source[3] as f32 / 255.0;
    let dst_alpha = dest[3] as f32 / 255.0 * (1.0 - src_alpha);
    let out_alpha = src_alpha + dst_alpha;

    let channel = |s: u8, d: u8| {
        ((s as f32 * src_alpha + d as f32 * dst_alpha) / out_alpha)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(source[0], dest[0]),
        channel(source[1], dest[1]),
        channel(source[2], dest[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
