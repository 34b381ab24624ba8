//! Composite commands and their one-time decomposition into atomic steps.
//!
//! Atomicity is resolved here, at enqueue time. The tick engine only ever
//! sees single-square steps and never re-derives paths.

use crate::piece::{ActionKind, Piece, PieceAction};
use crate::square::{intermediate_squares, Square};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// A user-intended command for one piece, before decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandIntent {
    Move(Square),
    Attack(Square),
    Castle(CastleSide),
    Promote(crate::types::PieceType),
}

/// King and rook destination squares for a castle, per color and side.
pub fn castle_squares(color: Color, side: CastleSide) -> CastleSquares {
    let rank = color.home_rank();
    match side {
        CastleSide::Kingside => CastleSquares {
            king_from: Square::new(4, rank),
            king_to: Square::new(6, rank),
            rook_from: Square::new(7, rank),
            rook_to: Square::new(5, rank),
        },
        CastleSide::Queenside => CastleSquares {
            king_from: Square::new(4, rank),
            king_to: Square::new(2, rank),
            rook_from: Square::new(0, rank),
            rook_to: Square::new(3, rank),
        },
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CastleSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Resolve an intent for `piece` into the atomic actions to queue.
///
/// - `Move`: every consecutive pair of the path becomes a move step.
/// - `Attack`: as `Move`, except the final pair becomes the attack step
///   (the tick engine requeues further attack steps while the defender
///   survives).
/// - `Castle`/`Promote`: a single action; castling is queued separately on
///   both pieces of the pair, each with its own from/to.
pub fn decompose(piece: &Piece, intent: CommandIntent) -> Vec<PieceAction> {
    match intent {
        CommandIntent::Move(to) => {
            let path = intermediate_squares(piece.square, to);
            path.windows(2)
                .map(|w| PieceAction::new(piece.color, piece.piece_type, ActionKind::Move, w[0], w[1]))
                .collect()
        }
        CommandIntent::Attack(to) => {
            let path = intermediate_squares(piece.square, to);
            let last = path.len() - 1;
            path.windows(2)
                .enumerate()
                .map(|(i, w)| {
                    let kind = if i + 1 == last {
                        ActionKind::Attack
                    } else {
                        ActionKind::Move
                    };
                    PieceAction::new(piece.color, piece.piece_type, kind, w[0], w[1])
                })
                .collect()
        }
        CommandIntent::Castle(side) => {
            let sq = castle_squares(piece.color, side);
            let kind = match side {
                CastleSide::Kingside => ActionKind::CastleKingside,
                CastleSide::Queenside => ActionKind::CastleQueenside,
            };
            let (from, to) = match piece.piece_type {
                crate::types::PieceType::Rook => (sq.rook_from, sq.rook_to),
                _ => (sq.king_from, sq.king_to),
            };
            vec![PieceAction::new(piece.color, piece.piece_type, kind, from, to)]
        }
        CommandIntent::Promote(target) => {
            vec![PieceAction::new(
                piece.color,
                piece.piece_type,
                ActionKind::Promote(target),
                piece.square,
                piece.square,
            )]
        }
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod intent_tests;
