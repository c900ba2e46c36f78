pub mod array;
pub mod board;
pub mod dims;

pub use board::{Cell, CellWall, Maze};
pub use dims::Dims;
