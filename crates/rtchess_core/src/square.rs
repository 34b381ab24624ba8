//! Discrete squares, continuous board coordinates, and path geometry.
//!
//! Squares are the unit the simulation reasons about; continuous
//! coordinates exist for cursors and for pieces animating between squares.
//! `intermediate_squares` is the single source of truth for how a composite
//! move is cut into atomic one-square steps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::BOARD_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed square {0:?}: expected a file 'a'-'h' and a rank '1'-'8'")]
    BadSquare(String),
    #[error("unknown scenario {0:?}")]
    UnknownScenario(String),
}

/// Continuous board position. `x` runs along files, `y` along ranks;
/// the square containing a coordinate is found by truncation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub x: f32,
    pub y: f32,
}

impl BoardCoordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub fn is_valid(file: i8, rank: i8) -> bool {
    (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Square {
        debug_assert!(is_valid(file, rank), "square off board: {file},{rank}");
        Square { file, rank }
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Result<Square, ParseError> {
        let b = s.as_bytes();
        if b.len() != 2
            || !(b'a'..=b'h').contains(&b[0])
            || !(b'1'..=b'8').contains(&b[1])
        {
            return Err(ParseError::BadSquare(s.to_string()));
        }
        Ok(Square {
            file: (b[0] - b'a') as i8,
            rank: (b[1] - b'1') as i8,
        })
    }

    /// Square containing a continuous coordinate, clamped to the board.
    pub fn from_coordinate(c: BoardCoordinate) -> Square {
        let file = (c.x.floor() as i8).clamp(0, BOARD_SIZE - 1);
        let rank = (c.y.floor() as i8).clamp(0, BOARD_SIZE - 1);
        Square { file, rank }
    }

    /// Center of this square in continuous coordinates.
    pub fn center(self) -> BoardCoordinate {
        BoardCoordinate {
            x: self.file as f32 + 0.5,
            y: self.rank as f32 + 0.5,
        }
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file + df;
        let rank = self.rank + dr;
        if is_valid(file, rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// 180-degree board rotation, used for perspective flips.
    pub fn rotate(self) -> Square {
        Square {
            file: BOARD_SIZE - 1 - self.file,
            rank: BOARD_SIZE - 1 - self.rank,
        }
    }

    pub fn same_file(self, other: Square) -> bool {
        self != other && self.file == other.file
    }

    pub fn same_rank(self, other: Square) -> bool {
        self != other && self.rank == other.rank
    }

    pub fn same_diagonal(self, other: Square) -> bool {
        self != other && (self.file - other.file).abs() == (self.rank - other.rank).abs()
    }

    /// True when `other` lies on one of this square's eight knight lines
    /// (any multiple of a 2:1 or 1:2 offset).
    pub fn same_half_diagonal(self, other: Square) -> bool {
        let df = (other.file - self.file).abs();
        let dr = (other.rank - self.rank).abs();
        if df == 0 && dr == 0 {
            return false;
        }
        dr == 2 * df || df == 2 * dr
    }

    /// True when `other` is exactly one knight leap away.
    pub fn adjacent_for_knight(self, other: Square) -> bool {
        let df = (other.file - self.file).abs();
        let dr = (other.rank - self.rank).abs();
        (df == 1 && dr == 2) || (df == 2 && dr == 1)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// Ordered squares from `from` to `to`, inclusive of both endpoints.
///
/// Supports horizontal, vertical and diagonal paths, plus knight lines
/// (repeated leaps along one knight vector). Each knight leap is expanded
/// into its two leg components: a straight step along the long axis, then
/// a diagonal step. Every consecutive pair in the result is therefore at
/// most one square apart on each axis.
///
/// Precondition: `to` must be reachable along one of those lines. Any
/// other offset is a caller bug and panics. This is not a path-finder.
pub fn intermediate_squares(from: Square, to: Square) -> Vec<Square> {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;
    let mut out = vec![from];
    if df == 0 && dr == 0 {
        return out;
    }

    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        let (sf, sr) = (df.signum(), dr.signum());
        let mut cur = from;
        while cur != to {
            cur = Square::new(cur.file + sf, cur.rank + sr);
            out.push(cur);
        }
        return out;
    }

    if from.same_half_diagonal(to) {
        // Leap vector and leap count along the knight line.
        let leaps = df.abs().min(dr.abs());
        let (lf, lr) = (df / leaps, dr / leaps);
        let mut cur = from;
        for _ in 0..leaps {
            // Straight leg along the long axis, then the diagonal leg.
            let mid = if lr.abs() == 2 {
                Square::new(cur.file, cur.rank + lr.signum())
            } else {
                Square::new(cur.file + lf.signum(), cur.rank)
            };
            cur = Square::new(cur.file + lf, cur.rank + lr);
            out.push(mid);
            out.push(cur);
        }
        return out;
    }

    panic!("no atomic path from {from} to {to}");
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod square_tests;
