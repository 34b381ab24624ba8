//! Legal target squares per piece type.
//!
//! Purely geometric: no check or pin safety is evaluated anywhere in this
//! engine, so a king may move into an attacked square. That mirrors the
//! real-time rules, where "check" has no meaning while both armies act
//! simultaneously.

use crate::game::Game;
use crate::piece::Piece;
use crate::square::Square;
use crate::types::{Color, PieceType};

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const CARDINAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const KING: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// All squares `piece` may currently be ordered to move to or attack.
pub fn possible_moves(game: &Game, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);
    match piece.piece_type {
        PieceType::Bishop => gen_rays(game, piece.square, piece.color, &DIAGONAL, &mut out),
        PieceType::Rook => gen_rays(game, piece.square, piece.color, &CARDINAL, &mut out),
        PieceType::Queen => {
            gen_rays(game, piece.square, piece.color, &DIAGONAL, &mut out);
            gen_rays(game, piece.square, piece.color, &CARDINAL, &mut out);
        }
        PieceType::Knight => gen_rays(game, piece.square, piece.color, &KNIGHT, &mut out),
        PieceType::King => gen_king(game, piece.square, piece.color, &mut out),
        PieceType::Pawn => gen_pawn(game, piece.square, piece.color, &mut out),
    }
    out
}

/// Walk each direction vector outward: stop before a friendly piece, stop
/// on (and include) an enemy piece, stop at the edge.
///
/// The same walk covers knights: each step of a knight ray is a full leap,
/// so pieces sitting inside a leap never block, only occupied landing
/// squares do.
fn gen_rays(game: &Game, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match game.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_king(game: &Game, from: Square, c: Color, out: &mut Vec<Square>) {
    for &(df, dr) in &KING {
        if let Some(to) = from.offset(df, dr) {
            match game.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

/// Pawns: the two diagonal-forward squares when enemy-occupied (the attack
/// set, computed first), then a forward run of up to seven empty squares,
/// truncated at the first occupied one. Forward squares never capture.
fn gen_pawn(game: &Game, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(pc) = game.piece_at(to) {
                if pc.color != c {
                    out.push(to);
                }
            }
        }
    }

    let mut cur = from;
    while let Some(to) = cur.offset(0, dir) {
        if game.piece_at(to).is_some() {
            break;
        }
        out.push(to);
        cur = to;
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
