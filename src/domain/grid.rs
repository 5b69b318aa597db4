use bitvec::prelude::{BitVec, bitvec};

use crate::foundation::error::{SketchError, SketchResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "[u32; 2]", try_from = "[u32; 2]")]
/// Fixed grid dimensions, serialized as `[cols, rows]`.
pub struct Resolution {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero rows or columns.
    pub fn new(cols: u32, rows: u32) -> SketchResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(SketchError::config("resolution cols/rows must be > 0"));
        }
        Ok(Self { cols, rows })
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl TryFrom<[u32; 2]> for Resolution {
    type Error = SketchError;

    fn try_from(v: [u32; 2]) -> SketchResult<Self> {
        Self::new(v[0], v[1])
    }
}

impl From<Resolution> for [u32; 2] {
    fn from(r: Resolution) -> Self {
        [r.cols, r.rows]
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Integer cell address within a [`Resolution`] grid.
pub struct CellCoord {
    /// Column index, `0..cols`.
    pub col: u32,
    /// Row index, `0..rows`.
    pub row: u32,
}

impl CellCoord {
    /// Create a cell address.
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Whether `other` touches this cell in the 8-neighborhood without
    /// crossing a toroidal seam. A wrapped step (e.g. last column to column
    /// zero) is deliberately not adjacent here; path rendering splits there.
    pub fn is_adjacent(self, other: CellCoord) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc <= 1 && dr <= 1 && (dc, dr) != (0, 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Step direction on the grid, in screen coordinates (y grows downward).
pub enum Direction {
    /// `(+1, 0)`
    East,
    /// `(+1, +1)`
    SouthEast,
    /// `(0, +1)`
    South,
    /// `(-1, +1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
    /// `(0, -1)`
    North,
    /// `(+1, -1)`
    NorthEast,
}

impl Direction {
    /// All eight directions in fixed clockwise order starting at East.
    ///
    /// This order is the tie-breaking order for every neighbor enumeration in
    /// the engine; changing it changes reproducible output.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The four cardinal directions, same ordering convention.
    pub const CARDINAL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Grid offset `(dcol, drow)` for one step.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
        }
    }
}

#[derive(Clone, Debug)]
/// The grid of addressable cells plus occupancy and exclusion state.
///
/// A domain is created fully open, optionally restricted by
/// [`clip_with_world_coords`](Domain::clip_with_world_coords), and then
/// mutated exclusively by the walker engine during the one-shot carve phase.
/// Afterwards it is treated as read-only for the lifetime of the render loop.
pub struct Domain {
    resolution: Resolution,
    toroidal: bool,
    occupied: BitVec,
    excluded: BitVec,
}

impl Domain {
    /// Create a fully-unoccupied, unexcluded domain.
    pub fn new(resolution: Resolution, toroidal: bool) -> Self {
        let len = resolution.cell_count();
        Self {
            resolution,
            toroidal,
            occupied: bitvec![0; len],
            excluded: bitvec![0; len],
        }
    }

    /// Grid dimensions.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Whether stepping off an edge wraps to the opposite side.
    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    /// Total number of cells, `cols * rows`.
    pub fn cell_count(&self) -> usize {
        self.resolution.cell_count()
    }

    fn index(&self, cell: CellCoord) -> usize {
        debug_assert!(cell.col < self.resolution.cols && cell.row < self.resolution.rows);
        cell.row as usize * self.resolution.cols as usize + cell.col as usize
    }

    /// Whether a path has claimed this cell.
    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.occupied[self.index(cell)]
    }

    /// Whether the cell lies outside the active clip boundary.
    pub fn is_excluded(&self, cell: CellCoord) -> bool {
        self.excluded[self.index(cell)]
    }

    /// Unoccupied and not excluded: a valid spawn site or step target.
    pub fn is_open(&self, cell: CellCoord) -> bool {
        let i = self.index(cell);
        !self.occupied[i] && !self.excluded[i]
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> Vec<CellCoord> {
        let mut out = Vec::new();
        for row in 0..self.resolution.rows {
            for col in 0..self.resolution.cols {
                let cell = CellCoord::new(col, row);
                if self.is_open(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Number of open cells.
    pub fn open_cell_count(&self) -> usize {
        self.occupied
            .iter()
            .by_vals()
            .zip(self.excluded.iter().by_vals())
            .filter(|&(occupied, excluded)| !occupied && !excluded)
            .count()
    }

    /// Mark a cell as claimed by a path. Occupancy is never released within a
    /// render pass.
    pub(crate) fn claim(&mut self, cell: CellCoord) {
        let i = self.index(cell);
        self.occupied.set(i, true);
    }

    /// Mark a cell as outside the clip boundary.
    pub(crate) fn exclude(&mut self, cell: CellCoord) {
        let i = self.index(cell);
        self.excluded.set(i, true);
    }

    /// The cell one step in `dir`, wrapping on a toroidal domain and
    /// returning `None` past the edge of a bounded one.
    pub fn neighbor(&self, cell: CellCoord, dir: Direction) -> Option<CellCoord> {
        let (dc, dr) = dir.offset();
        let cols = i64::from(self.resolution.cols);
        let rows = i64::from(self.resolution.rows);
        let col = i64::from(cell.col) + dc;
        let row = i64::from(cell.row) + dr;
        if self.toroidal {
            Some(CellCoord::new(
                col.rem_euclid(cols) as u32,
                row.rem_euclid(rows) as u32,
            ))
        } else if (0..cols).contains(&col) && (0..rows).contains(&row) {
            Some(CellCoord::new(col as u32, row as u32))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/grid.rs"]
mod tests;
