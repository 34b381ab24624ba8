use serde::{Deserialize, Serialize};

use crate::square::BoardCoordinate;

/// Board width/height in squares.
pub const BOARD_SIZE: i8 = 8;

/// Health every piece starts with.
pub const MAX_HEALTH: f32 = 100.0;

/// Damage applied per completed attack step. A full health pool depletes
/// over three completed steps.
pub const ATTACK_DAMAGE: f32 = 35.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the back row starts on.
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank pawns of this color promote on.
    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Letter used in move-history text. Pawns render without a letter.
    pub fn letter(self) -> &'static str {
        match self {
            PieceType::King => "K",
            PieceType::Queen => "Q",
            PieceType::Rook => "R",
            PieceType::Bishop => "B",
            PieceType::Knight => "N",
            PieceType::Pawn => "",
        }
    }
}

/// A player seat. Seats map to colors and control modes via `GameOptions`,
/// so the same input stream works regardless of which color a seat plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn idx(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Discrete input events, already resolved to a seat by the physical
/// controller layer. Only `PointerMove` carries a coordinate; everything
/// else acts on the seat's current cursor square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    SelectPrimary,
    SelectSecondary,
    SelectTertiary,
    SelectQuaternary,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PointerMove,
    PointerPrimaryDown,
    PointerSecondaryDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub kind: InputKind,
    pub seat: Seat,
    pub coordinate: Option<BoardCoordinate>,
}

impl UserInput {
    pub fn new(kind: InputKind, seat: Seat) -> Self {
        Self {
            kind,
            seat,
            coordinate: None,
        }
    }

    pub fn pointer(kind: InputKind, seat: Seat, coordinate: BoardCoordinate) -> Self {
        Self {
            kind,
            seat,
            coordinate: Some(coordinate),
        }
    }
}
