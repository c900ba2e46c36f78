use smaze_core::{CellWall, Dims, Maze};

/// Serializes the maze into fixed-width text blocks. Every cell is six
/// columns wide and four rows tall, sharing its border row and column with
/// the next cell, plus one closing border line and column:
///
/// ```text
/// +-----+
/// |     |
/// |  S  |
/// |     |
/// +-----+
/// ```
///
/// A cell's bottom border is drawn as the top border of the row below, so
/// both sides of a shared wall render identically. Path cells that are
/// neither start nor end get a `*` marker.
pub fn render(maze: &Maze, path: Option<&[Dims]>) -> String {
    let Dims(width, height) = maze.size();
    let mut out = String::new();

    for y in 0..height {
        // Top border, doubling as the bottom border of the row above.
        for x in 0..width {
            out.push('+');
            if maze[Dims(x, y)].has_wall(CellWall::Top) {
                out.push_str("-----");
            } else {
                out.push_str("     ");
            }
        }
        out.push_str("+\n");

        push_spacer_line(&mut out, maze, y);

        for x in 0..width {
            let pos = Dims(x, y);
            push_left_wall(&mut out, maze, pos);
            out.push_str("  ");
            out.push_str(marker(maze, pos, path));
        }
        out.push_str("|\n");

        push_spacer_line(&mut out, maze, y);
    }

    // The outer bottom border closes the block unconditionally.
    for _ in 0..width {
        out.push_str("+-----");
    }
    out.push_str("+\n");

    out
}

fn push_spacer_line(out: &mut String, maze: &Maze, y: i32) {
    let Dims(width, _) = maze.size();

    for x in 0..width {
        push_left_wall(out, maze, Dims(x, y));
        out.push_str("     ");
    }
    out.push_str("|\n");
}

fn push_left_wall(out: &mut String, maze: &Maze, pos: Dims) {
    out.push(if maze[pos].has_wall(CellWall::Left) {
        '|'
    } else {
        ' '
    });
}

fn marker(maze: &Maze, pos: Dims, path: Option<&[Dims]>) -> &'static str {
    if maze.is_start(pos) && maze.is_end(pos) {
        "SE "
    } else if maze.is_start(pos) {
        "S  "
    } else if maze.is_end(pos) {
        "E  "
    } else if path.is_some_and(|p| p.contains(&pos)) {
        "*  "
    } else {
        "   "
    }
}
