extern crate alloc;
use alloc::vec::Vec;

use rgb::RGB;

use crate::ExtractConfig;
use crate::error::ExtractError;
use crate::filter::{filter_distinct, filter_too_similar};
use crate::grid::Grid;
use crate::maxima::{LocalMaximum, find_local_maxima};
use crate::source::PixelSource;

/// The extraction engine: a reusable 3D histogram plus analysis parameters
/// fixed at construction.
///
/// One instance analyzes one image at a time (`&mut self`); the grid is
/// cleared at the start of every run, so sequential reuse across images is
/// free of cross-talk. Concurrent analyses need independent instances.
#[derive(Debug)]
pub struct ColorCube {
    resolution: usize,
    avoid_color: Option<RGB<u8>>,
    distinct_threshold: f32,
    bright_threshold: f32,
    grid: Grid,
}

impl ColorCube {
    /// Validate the configuration and allocate the grid.
    pub fn new(config: &ExtractConfig) -> Result<Self, ExtractError> {
        config.validate()?;
        Ok(Self {
            resolution: config.resolution as usize,
            avoid_color: config.avoid_color,
            distinct_threshold: config.distinct_threshold,
            bright_threshold: config.bright_threshold,
            grid: Grid::new(config.resolution as usize),
        })
    }

    /// Extract the dominant colors of `source`, most dominant first.
    ///
    /// Runs the full pipeline: histogram population, local-maxima detection,
    /// the avoid-color pass when configured, the distinctness pass, and
    /// truncating conversion to 8-bit channels. Degenerate sources (zero
    /// pixels, or nothing bright enough to count) produce an empty list, not
    /// an error.
    pub fn dominant_colors(&mut self, source: &impl PixelSource) -> Vec<RGB<u8>> {
        let mut maxima = self.local_maxima(source);
        if let Some(avoid) = self.avoid_color {
            maxima = filter_too_similar(maxima, avoid);
        }
        let maxima = filter_distinct(maxima, self.distinct_threshold);

        maxima
            .iter()
            .map(|m| RGB {
                // Truncation, not rounding.
                r: (m.r * 255.0) as u8,
                g: (m.g * 255.0) as u8,
                b: (m.b * 255.0) as u8,
            })
            .collect()
    }

    /// Populate the histogram from `source` and return its local maxima,
    /// sorted by descending hit count, before either filter pass.
    pub fn local_maxima(&mut self, source: &impl PixelSource) -> Vec<LocalMaximum> {
        self.populate(source);
        find_local_maxima(&self.grid)
    }

    /// Scan every pixel of `source` into the grid, clearing it first.
    fn populate(&mut self, source: &impl PixelSource) {
        self.grid.clear();

        let bucket_scale = (self.resolution - 1) as f32;

        for y in 0..source.height() {
            for x in 0..source.width() {
                let p = source.pixel_at(x, y);

                // Fully transparent pixels contribute nothing.
                if p.a == 0.0 {
                    continue;
                }

                // Too dark to contribute: all three channels below the
                // threshold, checked before alpha weighting.
                if p.r < self.bright_threshold
                    && p.g < self.bright_threshold
                    && p.b < self.bright_threshold
                {
                    continue;
                }

                // Down-weight translucent pixels instead of excluding them.
                let (r, g, b) = if p.a < 1.0 {
                    (p.r * p.a, p.g * p.a, p.b * p.a)
                } else {
                    (p.r, p.g, p.b)
                };

                // Truncating discretization; the clamp keeps out-of-contract
                // sources from indexing past the last bucket.
                let r_index = ((r * bucket_scale) as usize).min(self.resolution - 1);
                let g_index = ((g * bucket_scale) as usize).min(self.resolution - 1);
                let b_index = ((b * bucket_scale) as usize).min(self.resolution - 1);

                let index = self.grid.cell_index(r_index, g_index, b_index);
                self.grid.accumulate(index, r, g, b);
            }
        }
    }
}
