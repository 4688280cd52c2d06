//! Deterministic identicons.
//!
//! An input is hashed with MD5, the first three digest bytes pick the
//! color, and the next fifteen are mirrored into a 5x5 grid whose even
//! cells are painted as 50x50 squares on a 250x250 PNG.
//!
//! ```
//! let png = identicon::generate(b"alice").unwrap();
//! assert_eq!(png, identicon::generate(b"alice").unwrap());
//! ```

pub mod color;
pub mod digest;
pub mod error;
pub mod grid;
pub mod pixel_map;
pub mod render;

use color::Color;
use digest::Digest;
use error::IdenticonError;
use grid::{FilteredGrid, Grid};
use pixel_map::PixelMap;
use render::RenderedIdenticon;

/// Cells per grid row and column.
pub const GRID_SIZE: usize = 5;
/// Side length of one grid cell in pixels.
pub const CELL_SIZE: u32 = 50;
/// Side length of the output canvas in pixels.
pub const CANVAS_SIZE: u32 = GRID_SIZE as u32 * CELL_SIZE;

/// Every intermediate result of the pipeline for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    pub digest: Digest,
    pub color: Color,
    /// The painted cells, odd cells already removed.
    pub grid: FilteredGrid,
    /// One rectangle per entry of `grid`.
    pub pixel_map: PixelMap,
}

impl Identicon {
    /// Run every stage up to, but not including, rasterization.
    pub fn new(input: &[u8]) -> Self {
        let digest = digest::digest(input);
        let color = Color::from_digest(&digest);
        let grid = Grid::from_digest(&digest).filter_even();
        let pixel_map = PixelMap::from_cells(&grid);

        log::debug!(
            "identicon {}: color #{:02x}{:02x}{:02x}, {} cells painted",
            digest.to_hex(),
            color.r,
            color.g,
            color.b,
            grid.len()
        );

        Self {
            digest,
            color,
            grid,
            pixel_map,
        }
    }

    pub fn render(&self) -> RenderedIdenticon {
        render::render(self.color, &self.pixel_map)
    }

    pub fn to_png(&self) -> Result<Vec<u8>, IdenticonError> {
        self.render().encode_png()
    }
}

/// Generate the PNG identicon for `input`.
///
/// Equal inputs always produce byte-identical output.
pub fn generate(input: &[u8]) -> Result<Vec<u8>, IdenticonError> {
    Identicon::new(input).to_png()
}
