extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// One bucket of the 3D histogram.
///
/// Dividing the accumulators by the hit count gives the bucket's average
/// color. Channel sums are accumulated in f64 so large images do not lose
/// precision.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Number of pixels mapped to this bucket.
    pub hit_count: u32,
    /// Sum of normalized red values.
    pub r_acc: f64,
    /// Sum of normalized green values.
    pub g_acc: f64,
    /// Sum of normalized blue values.
    pub b_acc: f64,
}

/// Offsets of the full 27-cell neighborhood, the cell itself included.
///
/// The zero offset only ever compares a cell against itself, which cannot
/// disqualify it, so the stencil stays one plain fixed array.
pub const NEIGHBOR_OFFSETS: [[i32; 3]; 27] = [
    [0, 0, 0],
    [0, 0, 1],
    [0, 0, -1],
    [0, 1, 0],
    [0, 1, 1],
    [0, 1, -1],
    [0, -1, 0],
    [0, -1, 1],
    [0, -1, -1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 0, -1],
    [1, 1, 0],
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 0],
    [1, -1, 1],
    [1, -1, -1],
    [-1, 0, 0],
    [-1, 0, 1],
    [-1, 0, -1],
    [-1, 1, 0],
    [-1, 1, 1],
    [-1, 1, -1],
    [-1, -1, 0],
    [-1, -1, 1],
    [-1, -1, -1],
];

/// The color cube: `resolution³` cells addressed by a bijective 3D→1D index.
#[derive(Debug)]
pub struct Grid {
    resolution: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a cleared grid. `resolution` is validated upstream (≥ 2).
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            cells: vec![Cell::default(); resolution * resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Linear index for the cell at the given 3D coordinates:
    /// `r + g·resolution + b·resolution²`. Callers guarantee coordinates in
    /// `[0, resolution)`; out-of-range coordinates are a logic error.
    pub fn cell_index(&self, r: usize, g: usize, b: usize) -> usize {
        r + g * self.resolution + b * self.resolution * self.resolution
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Reset every cell's hit count and accumulators. Must run before each
    /// analysis; the grid is reusable across images.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.hit_count = 0;
            cell.r_acc = 0.0;
            cell.g_acc = 0.0;
            cell.b_acc = 0.0;
        }
    }

    /// Record one pixel's normalized (possibly alpha-weighted) color in the
    /// cell at `index`.
    pub fn accumulate(&mut self, index: usize, r: f32, g: f32, b: f32) {
        let cell = &mut self.cells[index];
        cell.hit_count += 1;
        cell.r_acc += r as f64;
        cell.g_acc += g as f64;
        cell.b_acc += b as f64;
    }
}
