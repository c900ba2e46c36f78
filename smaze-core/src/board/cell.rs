use crate::dims::Dims;

/// One grid position. Cells start fully walled, the loader opens sides as it
/// derives them from the wall codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            CellWall::Left => self.left = false,
            CellWall::Top => self.top = false,
            CellWall::Right => self.right = false,
            CellWall::Bottom => self.bottom = false,
        }
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Left => self.left,
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.has_wall(wall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    /// Scan order used by the solver. For mazes with several solutions this
    /// order decides which one is found, so it is part of the contract.
    pub fn get_in_order() -> [CellWall; 4] {
        use CellWall::*;

        [Left, Right, Top, Bottom]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}
