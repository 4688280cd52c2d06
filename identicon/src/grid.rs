use smallvec::SmallVec;

use crate::digest::Digest;
use crate::GRID_SIZE;

/// Number of cells in the full grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Digest bytes consumed per grid row before mirroring.
const GROUP_LEN: usize = 3;

/// One grid value tagged with its row-major position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub value: u8,
    /// Row-major index in `0..CELL_COUNT`.
    pub index: usize,
}

impl GridCell {
    pub fn row(&self) -> usize {
        self.index / GRID_SIZE
    }

    pub fn column(&self) -> usize {
        self.index % GRID_SIZE
    }

    /// Even values are painted, odd values are left blank.
    pub fn is_painted(&self) -> bool {
        self.value % 2 == 0
    }
}

/// Mirror a 3-byte group into a symmetric 5-wide row: `[a, b, c]` becomes
/// `[a, b, c, b, a]`.
pub fn mirror_row(group: [u8; GROUP_LEN]) -> [u8; GRID_SIZE] {
    let [a, b, c] = group;
    [a, b, c, b, a]
}

/// The full 5x5 grid, before any cells are filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [GridCell; CELL_COUNT],
}

impl Grid {
    /// Expand a digest into the mirrored grid.
    ///
    /// The digest is consumed in consecutive groups of three bytes and a
    /// trailing partial group is discarded rather than padded. For MD5 this
    /// yields exactly five rows and byte 15 never reaches the grid.
    pub fn from_digest(digest: &Digest) -> Self {
        let mut cells = [GridCell { value: 0, index: 0 }; CELL_COUNT];
        let mut filled = 0;

        let values = digest
            .0
            .chunks_exact(GROUP_LEN)
            .flat_map(|group| mirror_row([group[0], group[1], group[2]]));
        for (index, value) in values.enumerate() {
            cells[index] = GridCell { value, index };
            filled += 1;
        }

        assert_eq!(filled, CELL_COUNT);
        Self { cells }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Drop the odd-valued cells, keeping the order of the rest.
    pub fn filter_even(&self) -> FilteredGrid {
        let cells: SmallVec<[GridCell; CELL_COUNT]> = self
            .cells
            .iter()
            .copied()
            .filter(GridCell::is_painted)
            .collect();
        log::trace!("{} of {} cells painted", cells.len(), CELL_COUNT);
        FilteredGrid { cells }
    }
}

/// The cells that will be painted, in row-major order. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredGrid {
    cells: SmallVec<[GridCell; CELL_COUNT]>,
}

impl FilteredGrid {
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }
}
