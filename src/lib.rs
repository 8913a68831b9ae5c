#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cube;
pub mod error;
pub mod filter;
pub mod grid;
pub mod maxima;
pub mod source;

pub use cube::ColorCube;
pub use error::ExtractError;
pub use maxima::LocalMaximum;
pub use source::{PixelSource, RgbPixels, RgbaPixels};

use alloc::vec::Vec;

use rgb::{RGB, RGBA};

/// Configuration for dominant color extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Cells per axis of the color grid (2..=256). Higher resolutions
    /// separate nearby colors at the cost of cubically more cells.
    pub resolution: u32,
    /// Color whose neighborhood (distance below 0.5 in normalized color
    /// space) is removed from the results. `None` disables the pass.
    pub avoid_color: Option<RGB<u8>>,
    /// Minimum pairwise distance between reported colors, in normalized
    /// color space where the black-to-white diagonal is sqrt(3).
    pub distinct_threshold: f32,
    /// Pixels with every channel below this fraction (0.0..=1.0) are
    /// ignored as too dark.
    pub bright_threshold: f32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            resolution: 30,
            avoid_color: Some(RGB { r: 255, g: 255, b: 255 }),
            distinct_threshold: 0.2,
            bright_threshold: 0.6,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution(mut self, cells: u32) -> Self {
        self.resolution = cells;
        self
    }

    pub fn avoid_color(mut self, color: RGB<u8>) -> Self {
        self.avoid_color = Some(color);
        self
    }

    pub fn no_avoid_color(mut self) -> Self {
        self.avoid_color = None;
        self
    }

    pub fn distinct_threshold(mut self, threshold: f32) -> Self {
        self.distinct_threshold = threshold;
        self
    }

    pub fn bright_threshold(mut self, threshold: f32) -> Self {
        self.bright_threshold = threshold;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ExtractError> {
        if self.resolution < 2 || self.resolution > 256 {
            return Err(ExtractError::InvalidResolution(self.resolution));
        }
        if !self.distinct_threshold.is_finite() || self.distinct_threshold < 0.0 {
            return Err(ExtractError::InvalidDistinctThreshold(self.distinct_threshold));
        }
        if !(0.0..=1.0).contains(&self.bright_threshold) {
            return Err(ExtractError::InvalidBrightThreshold(self.bright_threshold));
        }
        Ok(())
    }
}

/// Extract the dominant colors of a row-major RGB image, most dominant first.
pub fn extract(
    pixels: &[RGB<u8>],
    width: usize,
    height: usize,
    config: &ExtractConfig,
) -> Result<Vec<RGB<u8>>, ExtractError> {
    let source = RgbPixels::new(pixels, width, height)?;
    let mut cube = ColorCube::new(config)?;
    Ok(cube.dominant_colors(&source))
}

/// Extract the dominant colors of a row-major RGBA image, most dominant first.
/// Fully transparent pixels contribute nothing; translucent pixels count at
/// reduced weight.
pub fn extract_rgba(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    config: &ExtractConfig,
) -> Result<Vec<RGB<u8>>, ExtractError> {
    let source = RgbaPixels::new(pixels, width, height)?;
    let mut cube = ColorCube::new(config)?;
    Ok(cube.dominant_colors(&source))
}
