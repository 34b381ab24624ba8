use super::*;
use crate::piece::{ActionKind, Piece, PieceId};
use crate::types::PieceType;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn piece(piece_type: PieceType, at: &str) -> Piece {
    Piece::new(PieceId(0), Color::White, piece_type, sq(at))
}

#[test]
fn test_move_decomposes_into_single_steps() {
    let pawn = piece(PieceType::Pawn, "e2");
    let actions = decompose(&pawn, CommandIntent::Move(sq("e4")));
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].from, sq("e2"));
    assert_eq!(actions[0].to, sq("e3"));
    assert_eq!(actions[1].from, sq("e3"));
    assert_eq!(actions[1].to, sq("e4"));
    assert!(actions.iter().all(|a| a.kind == ActionKind::Move));
}

#[test]
fn test_adjacent_attack_is_a_single_step() {
    let rook = piece(PieceType::Rook, "a1");
    let actions = decompose(&rook, CommandIntent::Attack(sq("a2")));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind, ActionKind::Attack);
    assert_eq!(actions[0].to, sq("a2"));
}

#[test]
fn test_distant_attack_moves_then_strikes() {
    let rook = piece(PieceType::Rook, "a1");
    let actions = decompose(&rook, CommandIntent::Attack(sq("a4")));
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0].kind, ActionKind::Move);
    assert_eq!(actions[1].kind, ActionKind::Move);
    assert_eq!(actions[2].kind, ActionKind::Attack);
    // The strike happens from the square adjacent to the target.
    assert_eq!(actions[2].from, sq("a3"));
    assert_eq!(actions[2].to, sq("a4"));
}

#[test]
fn test_knight_leap_has_two_leg_components() {
    let knight = piece(PieceType::Knight, "b1");
    let actions = decompose(&knight, CommandIntent::Move(sq("c3")));
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].from, sq("b1"));
    assert_eq!(actions[0].to, sq("b2"));
    assert_eq!(actions[1].from, sq("b2"));
    assert_eq!(actions[1].to, sq("c3"));
}

#[test]
fn test_promote_is_in_place() {
    let pawn = piece(PieceType::Pawn, "e8");
    let actions = decompose(&pawn, CommandIntent::Promote(PieceType::Queen));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind, ActionKind::Promote(PieceType::Queen));
    assert_eq!(actions[0].from, sq("e8"));
    assert_eq!(actions[0].to, sq("e8"));
}

#[test]
fn test_castle_gives_each_piece_its_own_leg() {
    let king = piece(PieceType::King, "e1");
    let actions = decompose(&king, CommandIntent::Castle(CastleSide::Kingside));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind, ActionKind::CastleKingside);
    assert_eq!(actions[0].from, sq("e1"));
    assert_eq!(actions[0].to, sq("g1"));

    let rook = piece(PieceType::Rook, "h1");
    let actions = decompose(&rook, CommandIntent::Castle(CastleSide::Kingside));
    assert_eq!(actions[0].from, sq("h1"));
    assert_eq!(actions[0].to, sq("f1"));

    let rook = piece(PieceType::Rook, "a1");
    let actions = decompose(&rook, CommandIntent::Castle(CastleSide::Queenside));
    assert_eq!(actions[0].kind, ActionKind::CastleQueenside);
    assert_eq!(actions[0].from, sq("a1"));
    assert_eq!(actions[0].to, sq("d1"));
}
