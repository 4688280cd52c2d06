use smallvec::SmallVec;

use crate::grid::{FilteredGrid, GridCell, CELL_COUNT};
use crate::CELL_SIZE;

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Axis-aligned rectangle covering one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl PixelRect {
    /// Rectangle covering `cell`.
    pub fn for_cell(cell: &GridCell) -> Self {
        let horizontal = cell.column() as u32 * CELL_SIZE;
        let vertical = cell.row() as u32 * CELL_SIZE;
        Self {
            top_left: Point {
                x: horizontal,
                y: vertical,
            },
            bottom_right: Point {
                x: horizontal + CELL_SIZE,
                y: vertical + CELL_SIZE,
            },
        }
    }

    /// Rectangle for the cell at row-major `index`.
    ///
    /// Panics if `index` is outside the grid.
    pub fn for_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        Self::for_cell(&GridCell { value: 0, index })
    }

    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Whether pixel (x, y) falls in the half-open area
    /// `[top_left, bottom_right)`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.top_left.x..self.bottom_right.x).contains(&x)
            && (self.top_left.y..self.bottom_right.y).contains(&y)
    }
}

/// Rectangles for the painted cells, parallel to the [`FilteredGrid`]
/// they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelMap {
    rects: SmallVec<[PixelRect; CELL_COUNT]>,
}

impl PixelMap {
    pub fn from_cells(grid: &FilteredGrid) -> Self {
        let rects = grid.iter().map(PixelRect::for_cell).collect();
        Self { rects }
    }

    pub fn rects(&self) -> &[PixelRect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelRect> {
        self.rects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::digest;
    use crate::grid::Grid;
    use crate::CANVAS_SIZE;

    fn rect(x1: u32, y1: u32, x2: u32, y2: u32) -> PixelRect {
        PixelRect {
            top_left: Point { x: x1, y: y1 },
            bottom_right: Point { x: x2, y: y2 },
        }
    }

    #[test]
    fn corner_cells() {
        assert_eq!(PixelRect::for_index(0), rect(0, 0, 50, 50));
        assert_eq!(PixelRect::for_index(4), rect(200, 0, 250, 50));
        assert_eq!(PixelRect::for_index(20), rect(0, 200, 50, 250));
        assert_eq!(PixelRect::for_index(24), rect(200, 200, 250, 250));
    }

    #[test]
    fn rect_follows_row_major_formula() {
        for i in 0..CELL_COUNT {
            let r = PixelRect::for_index(i);
            let (col, row) = ((i % 5) as u32, (i / 5) as u32);
            assert_eq!(r, rect(50 * col, 50 * row, 50 * col + 50, 50 * row + 50));
            assert_eq!((r.width(), r.height()), (CELL_SIZE, CELL_SIZE));
        }
    }

    #[test]
    fn rect_ignores_cell_value() {
        let odd = GridCell { value: 33, index: 7 };
        let even = GridCell { value: 70, index: 7 };
        assert_eq!(PixelRect::for_cell(&odd), PixelRect::for_cell(&even));
        assert_eq!(PixelRect::for_cell(&even), rect(100, 50, 150, 100));
        assert_eq!(PixelRect::for_cell(&even), PixelRect::for_index(7));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_grid_panics() {
        PixelRect::for_index(CELL_COUNT);
    }

    #[test]
    fn rects_tile_canvas_exactly() {
        let rects: Vec<PixelRect> = (0..CELL_COUNT).map(PixelRect::for_index).collect();
        for y in 0..CANVAS_SIZE {
            for x in 0..CANVAS_SIZE {
                let hits = rects.iter().filter(|r| r.contains(x, y)).count();
                assert_eq!(hits, 1, "pixel ({x}, {y}) covered {hits} times");
            }
        }
        assert!(rects.iter().all(|r| r.bottom_right.x <= CANVAS_SIZE
            && r.bottom_right.y <= CANVAS_SIZE));
    }

    #[test]
    fn pixel_map_for_test_input() {
        let filtered = Grid::from_digest(&digest(b"test")).filter_even();
        let map = PixelMap::from_cells(&filtered);

        assert_eq!(map.len(), filtered.len());
        assert_eq!(map.rects()[0], rect(50, 50, 100, 100));
        // index 8, value 70
        assert_eq!(map.rects()[1], rect(150, 50, 200, 100));
        for (cell, r) in filtered.iter().zip(map.iter()) {
            assert_eq!(*r, PixelRect::for_cell(cell));
        }
    }

    #[test]
    fn empty_grid_gives_empty_map() {
        let map = PixelMap::from_cells(&FilteredGrid::default());
        assert!(map.is_empty());
    }
}
