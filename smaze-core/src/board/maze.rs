use std::ops;

use crate::{array::Array2D, dims::Dims};

use super::cell::{Cell, CellWall};

/// A loaded maze. The grid is immutable after loading, solver state lives in
/// the solve call itself.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Dims,
    pub(crate) end: Dims,
}

impl Maze {
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn is_start(&self, pos: Dims) -> bool {
        pos == self.start
    }

    pub fn is_end(&self, pos: Dims) -> bool {
        pos == self.end
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(width, height) = self.size();

        0 <= pos.0 && pos.0 < width && 0 <= pos.1 && pos.1 < height
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// The cell adjacent to `pos` across the given wall, or `None` when the
    /// offset leaves the grid. Callers are expected to check the wall flag
    /// first, an edge cell of a well-formed maze is walled on the outside.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let other = pos + wall.to_coord();

        self.is_in_bounds(other).then_some(other)
    }
}

impl ops::Index<Dims> for Maze {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}
