use rgb::RGBA;

use crate::error::ExtractError;

/// Abstract pixel access for the extraction engine.
///
/// The crate performs no image decoding; callers hand it anything that can
/// report dimensions and per-pixel color. Channel values are normalized to
/// [0, 1]. Alpha is 1.0 for fully opaque pixels; sources without an alpha
/// channel report 1.0 throughout.
pub trait PixelSource {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Normalized RGBA at (x, y). Callers guarantee `x < width()` and
    /// `y < height()`.
    fn pixel_at(&self, x: usize, y: usize) -> RGBA<f32>;
}

/// Borrowed row-major RGB pixel buffer. Pixels are treated as fully opaque.
#[derive(Debug, Clone, Copy)]
pub struct RgbPixels<'a> {
    pixels: &'a [rgb::RGB<u8>],
    width: usize,
    height: usize,
}

impl<'a> RgbPixels<'a> {
    /// Wrap a pixel slice, verifying its length against the dimensions.
    pub fn new(
        pixels: &'a [rgb::RGB<u8>],
        width: usize,
        height: usize,
    ) -> Result<Self, ExtractError> {
        if pixels.len() != width * height {
            return Err(ExtractError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

impl PixelSource for RgbPixels<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel_at(&self, x: usize, y: usize) -> RGBA<f32> {
        let p = self.pixels[y * self.width + x];
        RGBA {
            r: p.r as f32 / 255.0,
            g: p.g as f32 / 255.0,
            b: p.b as f32 / 255.0,
            a: 1.0,
        }
    }
}

/// Borrowed row-major RGBA pixel buffer. Alpha 255 = fully opaque.
#[derive(Debug, Clone, Copy)]
pub struct RgbaPixels<'a> {
    pixels: &'a [rgb::RGBA<u8>],
    width: usize,
    height: usize,
}

impl<'a> RgbaPixels<'a> {
    /// Wrap a pixel slice, verifying its length against the dimensions.
    pub fn new(
        pixels: &'a [rgb::RGBA<u8>],
        width: usize,
        height: usize,
    ) -> Result<Self, ExtractError> {
        if pixels.len() != width * height {
            return Err(ExtractError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

impl PixelSource for RgbaPixels<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel_at(&self, x: usize, y: usize) -> RGBA<f32> {
        let p = self.pixels[y * self.width + x];
        RGBA {
            r: p.r as f32 / 255.0,
            g: p.g as f32 / 255.0,
            b: p.b as f32 / 255.0,
            a: p.a as f32 / 255.0,
        }
    }
}
