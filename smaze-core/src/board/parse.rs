use std::str::FromStr;

use thiserror::Error;

use crate::{array::Array2D, dims::Dims};

use super::{
    cell::{Cell, CellWall},
    maze::Maze,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("maze file ended before the {0} line")]
    MissingHeader(&'static str),
    #[error("malformed {what} line {line:?}, expected two integers")]
    MalformedHeader { what: &'static str, line: String },
    #[error("maze size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("start cell {pos:?} is outside the maze")]
    StartOutOfBounds { pos: Dims },
    #[error("end cell {pos:?} is outside the maze")]
    EndOutOfBounds { pos: Dims },
    #[error("expected {expected} rows of wall codes, got {got}")]
    RowCount { expected: usize, got: usize },
    #[error("row {row} has {got} wall codes, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown wall code {code:?} at column {col}, row {row}")]
    UnknownWallCode { code: char, col: usize, row: usize },
}

/// Loads a maze from its textual description:
///
/// ```text
/// <width> <height>
/// <startCol> <startRow>
/// <endCol> <endRow>
/// <height lines of <width> wall codes from {L,_,|,-}>
/// ```
///
/// A wall code declares the cell's own left and bottom wall (`L` both, `_`
/// bottom, `|` left, `-` neither). The two remaining sides are derived so
/// that neighbors always agree on the wall between them: the top wall mirrors
/// the bottom of the cell above (row 0 is closed), the right wall mirrors the
/// left wall declared by the next code (the last column is closed).
pub fn parse(input: &str) -> Result<Maze, ParseError> {
    let mut lines = input.lines();

    let (width, height) = header_pair(lines.next(), "size")?;
    let (start_x, start_y) = header_pair(lines.next(), "start")?;
    let (end_x, end_y) = header_pair(lines.next(), "end")?;

    if width <= 0 || height <= 0 {
        return Err(ParseError::InvalidSize { width, height });
    }

    let in_bounds = |pos: Dims| pos.all_non_negative() && pos.0 < width && pos.1 < height;

    let start = Dims(start_x, start_y);
    if !in_bounds(start) {
        return Err(ParseError::StartOutOfBounds { pos: start });
    }

    let end = Dims(end_x, end_y);
    if !in_bounds(end) {
        return Err(ParseError::EndOutOfBounds { pos: end });
    }

    let rows: Vec<&str> = lines.collect();
    if rows.len() != height as usize {
        return Err(ParseError::RowCount {
            expected: height as usize,
            got: rows.len(),
        });
    }

    let mut cells = Array2D::new(Cell::new(), width as usize, height as usize);

    for (y, row) in rows.iter().enumerate() {
        let codes: Vec<char> = row.chars().collect();
        if codes.len() != width as usize {
            return Err(ParseError::RowLength {
                row: y,
                expected: width as usize,
                got: codes.len(),
            });
        }

        for (x, &code) in codes.iter().enumerate() {
            let (left, bottom) = decode(code).ok_or(ParseError::UnknownWallCode {
                code,
                col: x,
                row: y,
            })?;

            let pos = Dims(x as i32, y as i32);

            // Derived, never read from the current row's code.
            let top = match y {
                0 => true,
                _ => cells[pos + CellWall::Top.to_coord()].has_wall(CellWall::Bottom),
            };

            let right = match codes.get(x + 1) {
                Some(&next) => declares_left(next),
                None => true,
            };

            let cell = &mut cells[pos];
            if !left {
                cell.remove_wall(CellWall::Left);
            }
            if !top {
                cell.remove_wall(CellWall::Top);
            }
            if !right {
                cell.remove_wall(CellWall::Right);
            }
            if !bottom {
                cell.remove_wall(CellWall::Bottom);
            }
        }
    }

    log::debug!("loaded {}x{} maze, start {:?}, end {:?}", width, height, start, end);

    Ok(Maze { cells, start, end })
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn header_pair(line: Option<&str>, what: &'static str) -> Result<(i32, i32), ParseError> {
    let line = line.ok_or(ParseError::MissingHeader(what))?;
    let malformed = || ParseError::MalformedHeader {
        what,
        line: line.to_string(),
    };

    let mut tokens = line.split_whitespace();
    let a = tokens
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let b = tokens
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;

    if tokens.next().is_some() {
        return Err(malformed());
    }

    Ok((a, b))
}

/// The cell's own (left, bottom) wall declaration.
fn decode(code: char) -> Option<(bool, bool)> {
    match code {
        'L' => Some((true, true)),
        '_' => Some((false, true)),
        '|' => Some((true, false)),
        '-' => Some((false, false)),
        _ => None,
    }
}

fn declares_left(code: char) -> bool {
    matches!(code, 'L' | '|')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_3x2() -> &'static str {
        "3 2\n0 0\n2 1\nL_|\nLL_\n"
    }

    #[test]
    fn derives_walls_from_codes() {
        let maze = parse(maze_3x2()).unwrap();

        // Row 0: `L`, `_`, `|`.
        assert!(maze[Dims(0, 0)].has_wall(CellWall::Left));
        assert!(maze[Dims(0, 0)].has_wall(CellWall::Bottom));
        assert!(maze[Dims(0, 0)].is_open(CellWall::Right));
        assert!(maze[Dims(1, 0)].is_open(CellWall::Left));
        assert!(maze[Dims(1, 0)].has_wall(CellWall::Right));
        assert!(maze[Dims(2, 0)].has_wall(CellWall::Left));
        assert!(maze[Dims(2, 0)].is_open(CellWall::Bottom));

        // Top row and last column are forced closed.
        assert!(maze[Dims(1, 0)].has_wall(CellWall::Top));
        assert!(maze[Dims(2, 0)].has_wall(CellWall::Right));
        assert!(maze[Dims(2, 1)].has_wall(CellWall::Right));

        // Row 1 tops come from row 0 bottoms.
        assert!(maze[Dims(0, 1)].has_wall(CellWall::Top));
        assert!(maze[Dims(2, 1)].is_open(CellWall::Top));
    }

    #[test]
    fn shared_walls_are_consistent() {
        let maze = parse(maze_3x2()).unwrap();

        for pos in maze.cells.iter_pos() {
            for wall in [CellWall::Right, CellWall::Bottom] {
                let Some(other) = maze.neighbor(pos, wall) else {
                    continue;
                };

                assert_eq!(
                    maze[pos].has_wall(wall),
                    maze[other].has_wall(wall.reverse_wall()),
                    "cells {:?} and {:?} disagree on the wall between them",
                    pos,
                    other,
                );
            }
        }
    }

    #[test]
    fn exactly_one_start_and_end() {
        let maze = parse(maze_3x2()).unwrap();

        let size = maze.size();
        let starts = Dims::iter_fill(Dims::ZERO, size)
            .filter(|&pos| maze.is_start(pos))
            .count();
        let ends = Dims::iter_fill(Dims::ZERO, size)
            .filter(|&pos| maze.is_end(pos))
            .count();

        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
    }

    #[test]
    fn start_and_end_may_coincide() {
        let maze = parse("1 1\n0 0\n0 0\nL\n").unwrap();

        assert!(maze.is_start(Dims(0, 0)));
        assert!(maze.is_end(Dims(0, 0)));
    }

    #[test]
    fn header_coordinates_are_column_then_row() {
        let maze = parse("3 2\n2 0\n0 1\nL_|\nLL_\n").unwrap();

        assert_eq!(maze.start(), Dims(2, 0));
        assert_eq!(maze.end(), Dims(0, 1));
    }

    #[test]
    fn missing_header_lines() {
        assert!(matches!(parse(""), Err(ParseError::MissingHeader("size"))));
        assert!(matches!(
            parse("2 1\n"),
            Err(ParseError::MissingHeader("start"))
        ));
        assert!(matches!(
            parse("2 1\n0 0\n"),
            Err(ParseError::MissingHeader("end"))
        ));
    }

    #[test]
    fn malformed_header_tokens() {
        assert!(matches!(
            parse("2 x\n0 0\n1 0\nL_\n"),
            Err(ParseError::MalformedHeader { what: "size", .. })
        ));
        assert!(matches!(
            parse("2 1\n0\n1 0\nL_\n"),
            Err(ParseError::MalformedHeader { what: "start", .. })
        ));
        assert!(matches!(
            parse("2 1\n0 0\n1 0 7\nL_\n"),
            Err(ParseError::MalformedHeader { what: "end", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(
            parse("0 2\n0 0\n0 0\n"),
            Err(ParseError::InvalidSize { width: 0, height: 2 })
        ));
    }

    #[test]
    fn rejects_out_of_range_roles() {
        assert!(matches!(
            parse("2 1\n2 0\n1 0\nL_\n"),
            Err(ParseError::StartOutOfBounds { pos: Dims(2, 0) })
        ));
        assert!(matches!(
            parse("2 1\n0 0\n0 -1\nL_\n"),
            Err(ParseError::EndOutOfBounds { pos: Dims(0, -1) })
        ));
    }

    #[test]
    fn rejects_wrong_row_count() {
        assert!(matches!(
            parse("2 2\n0 0\n1 1\nL_\n"),
            Err(ParseError::RowCount {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            parse("3 2\n0 0\n2 1\nL_|\nLL\n"),
            Err(ParseError::RowLength {
                row: 1,
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn rejects_unknown_wall_code() {
        assert!(matches!(
            parse("3 1\n0 0\n2 0\nL#_\n"),
            Err(ParseError::UnknownWallCode {
                code: '#',
                col: 1,
                row: 0
            })
        ));
    }
}
