use hashbrown::HashSet;

use crate::dims::Dims;

use super::{cell::CellWall, maze::Maze};

/// Cells on the route from start to end, in walking order.
pub type Path = Vec<Dims>;

/// Iterative depth-first search with an explicit backtracking stack. The
/// stack is both the candidate path so far and the undo mechanism: a cell
/// whose open neighbors are all visited gets popped again.
///
/// Returns `None` when no route connects start and end. That is a normal
/// outcome, the stack simply runs empty. Visited state is owned by this call,
/// the maze itself is never touched, so repeated solves of one maze are
/// independent and deterministic.
pub fn solve(maze: &Maze) -> Option<Path> {
    let mut visited = HashSet::with_capacity(maze.cells.len());
    let mut stack = Vec::new();

    visited.insert(maze.start());
    stack.push(maze.start());

    loop {
        let Some(&current) = stack.last() else {
            break;
        };

        if maze.is_end(current) {
            log::debug!("solved, path length {}", stack.len());
            return Some(stack);
        }

        match next_step(maze, current, &visited) {
            Some(next) => {
                visited.insert(next);
                stack.push(next);
            }
            // Dead end, drop back to the previous cell on the path.
            None => {
                stack.pop();
            }
        }
    }

    log::debug!("no path from {:?} to {:?}", maze.start(), maze.end());

    None
}

/// First open, unvisited neighbor of `current` in the fixed scan order.
fn next_step(maze: &Maze, current: Dims, visited: &HashSet<Dims>) -> Option<Dims> {
    let cell = &maze.cells[current];

    for wall in CellWall::get_in_order() {
        if cell.has_wall(wall) {
            continue;
        }

        let Some(next) = maze.neighbor(current, wall) else {
            // Only reachable when the input leaves an outer bottom or left
            // boundary open, the loader closes the other two sides itself.
            log::error!(
                "cell {:?} is open toward {:?} at the grid edge, walls are inconsistent",
                current,
                wall,
            );
            continue;
        };

        if !visited.contains(&next) {
            return Some(next);
        }
    }

    None
}
