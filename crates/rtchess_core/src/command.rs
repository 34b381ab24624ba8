//! Command interpreter: user inputs against current game state.
//!
//! All four action slots funnel into the same select/move truth table; the
//! promotion and castling overrides are layered on top and win when their
//! preconditions hold. Anything that fails a precondition emits `Cannot`
//! and queues nothing.

use crate::game::Game;
use crate::intent::{castle_squares, CastleSide, CommandIntent};
use crate::message::MessageKind;
use crate::movegen::possible_moves;
use crate::scenario::ControlMode;
use crate::square::Square;
use crate::types::{Color, InputKind, PieceType, Seat, UserInput, BOARD_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

pub fn handle_input(game: &mut Game, input: UserInput) {
    let seat = input.seat;
    let pointer = game.options().control_of(seat) == ControlMode::Pointer;
    match input.kind {
        InputKind::CursorUp => move_cursor(game, seat, 0.0, 1.0),
        InputKind::CursorDown => move_cursor(game, seat, 0.0, -1.0),
        InputKind::CursorLeft => move_cursor(game, seat, -1.0, 0.0),
        InputKind::CursorRight => move_cursor(game, seat, 1.0, 0.0),
        InputKind::PointerMove => {
            if pointer {
                if let Some(mut c) = input.coordinate {
                    c.x = c.x.clamp(0.0, BOARD_SIZE as f32 - 0.01);
                    c.y = c.y.clamp(0.0, BOARD_SIZE as f32 - 0.01);
                    game.set_cursor(seat, c);
                }
            }
        }
        InputKind::PointerPrimaryDown => {
            if pointer {
                press(game, seat, Slot::Primary);
            }
        }
        InputKind::PointerSecondaryDown => {
            if pointer {
                press(game, seat, Slot::Secondary);
            }
        }
        InputKind::SelectPrimary => press(game, seat, Slot::Primary),
        InputKind::SelectSecondary => press(game, seat, Slot::Secondary),
        InputKind::SelectTertiary => press(game, seat, Slot::Tertiary),
        InputKind::SelectQuaternary => press(game, seat, Slot::Quaternary),
    }
}

/// Step the keyboard cursor one square. Seats playing Black see the board
/// rotated, so their deltas flip.
fn move_cursor(game: &mut Game, seat: Seat, df: f32, dr: f32) {
    let (df, dr) = match game.options().color_of(seat) {
        Color::White => (df, dr),
        Color::Black => (-df, -dr),
    };
    let mut c = game.cursor_position(seat);
    c.x = (c.x + df).clamp(0.5, BOARD_SIZE as f32 - 0.5);
    c.y = (c.y + dr).clamp(0.5, BOARD_SIZE as f32 - 0.5);
    game.set_cursor(seat, c);
}

fn press(game: &mut Game, seat: Seat, slot: Slot) {
    let color = game.options().color_of(seat);
    let cursor_sq = Square::from_coordinate(game.cursor_position(seat));
    let target = game.index_at(cursor_sq);
    let selected = game.selected_index(color);

    // Promotion override: a targeted own pawn on its last rank turns the
    // four slots into promote-to-{queen,rook,bishop,knight}.
    if let Some(t) = target {
        let p = &game.all_pieces()[t];
        if p.color == color
            && p.piece_type == PieceType::Pawn
            && p.square.rank == color.promotion_rank()
        {
            let kind = match slot {
                Slot::Primary => PieceType::Queen,
                Slot::Secondary => PieceType::Rook,
                Slot::Tertiary => PieceType::Bishop,
                Slot::Quaternary => PieceType::Knight,
            };
            game.enqueue_intent(t, CommandIntent::Promote(kind));
            return;
        }
    }

    // Castling override: with an own king selected, the tertiary and
    // quaternary slots order kingside/queenside castling.
    if let Some(s) = selected {
        if matches!(slot, Slot::Tertiary | Slot::Quaternary)
            && game.all_pieces()[s].piece_type == PieceType::King
        {
            let side = if slot == Slot::Tertiary {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            try_castle(game, s, color, side);
            return;
        }
    }

    match (selected, target) {
        (Some(s), Some(t)) if s == t => {
            game.piece_mut(s).selected = false;
            game.emit(s, MessageKind::Unselect);
        }
        (Some(s), Some(t)) if game.all_pieces()[t].color == color => {
            game.piece_mut(s).selected = false;
            game.emit(s, MessageKind::Unselect);
            game.piece_mut(t).selected = true;
            game.emit(t, MessageKind::Select);
        }
        (Some(s), Some(t)) => try_attack(game, s, t),
        (Some(s), None) => try_move(game, s, cursor_sq),
        (None, Some(t)) if game.all_pieces()[t].color == color => {
            game.piece_mut(t).selected = true;
            game.emit(t, MessageKind::Select);
        }
        // No selection and nothing of ours under the cursor: no-op.
        _ => {}
    }
}

fn try_move(game: &mut Game, s: usize, to: Square) {
    let legal = possible_moves(game, &game.all_pieces()[s]).contains(&to);
    if !legal {
        game.emit(s, MessageKind::Cannot);
        return;
    }
    game.piece_mut(s).selected = false;
    game.enqueue_intent(s, CommandIntent::Move(to));
    game.emit(s, MessageKind::StartMove);
}

fn try_attack(game: &mut Game, s: usize, t: usize) {
    let target_sq = game.all_pieces()[t].square;
    let legal = possible_moves(game, &game.all_pieces()[s]).contains(&target_sq);
    if !legal {
        game.emit(s, MessageKind::Cannot);
        return;
    }
    game.piece_mut(s).selected = false;
    game.enqueue_intent(s, CommandIntent::Attack(target_sq));
    game.emit(s, MessageKind::StartAttack);
}

/// Enqueue a castle on both pieces of the pair, or `Cannot` if the rights
/// are gone or the path is blocked. Threat along the path is deliberately
/// not checked: this engine has no notion of check.
fn try_castle(game: &mut Game, king_idx: usize, color: Color, side: CastleSide) {
    let sqs = castle_squares(color, side);
    let rook_idx = game.index_at(sqs.rook_from);
    let king_ok = {
        let k = &game.all_pieces()[king_idx];
        !k.has_moved && k.square == sqs.king_from
    };
    let rook_ok = rook_idx.map_or(false, |r| {
        let rk = &game.all_pieces()[r];
        rk.color == color && rk.piece_type == PieceType::Rook && !rk.has_moved
    });
    let between = match side {
        CastleSide::Kingside => &[5, 6][..],
        CastleSide::Queenside => &[1, 2, 3][..],
    };
    let path_clear = between
        .iter()
        .all(|&f| game.piece_at(Square::new(f, color.home_rank())).is_none());

    if !(king_ok && rook_ok && path_clear) {
        game.emit(king_idx, MessageKind::Cannot);
        return;
    }
    let rook_idx = rook_idx.expect("rook checked");
    game.piece_mut(king_idx).selected = false;
    game.enqueue_intent(king_idx, CommandIntent::Castle(side));
    game.enqueue_intent(rook_idx, CommandIntent::Castle(side));
    let msg = match side {
        CastleSide::Kingside => MessageKind::StartCastleKingside,
        CastleSide::Queenside => MessageKind::StartCastleQueenside,
    };
    game.emit(king_idx, msg);
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
