use std::{fs, path::Path};

use smaze_core::{
    board::{parse::ParseError, solve},
    Maze,
};
use thiserror::Error;

use crate::render;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid maze file: {0}")]
    Parse(#[from] ParseError),
}

/// Loads the maze, solves it unless asked not to, and prints the render.
/// A maze without a solution is not an error, it renders without an overlay
/// and gets an explicit notice instead.
pub fn run(maze_file: &Path, no_solve: bool) -> Result<(), AppError> {
    let input = fs::read_to_string(maze_file)?;
    let maze: Maze = input.parse()?;

    let solution = if no_solve { None } else { solve(&maze) };

    print!("{}", render::render(&maze, solution.as_deref()));

    if !no_solve && solution.is_none() {
        println!("There is no solution to this maze");
    }

    Ok(())
}
