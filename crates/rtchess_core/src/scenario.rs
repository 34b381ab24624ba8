//! Starting layouts and game options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::square::{ParseError, Square};
use crate::types::{Color, PieceType, Seat};

/// Named starting layouts. `Standard` is the classic opening; the rest are
/// reduced test boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Standard,
    KingsOnly,
    PawnWave,
    RookDuel,
    Legion,
}

impl Scenario {
    /// The fixed piece placement table for this scenario.
    pub fn layout(self) -> Vec<(Color, PieceType, Square)> {
        let mut out = Vec::with_capacity(32);
        match self {
            Scenario::Standard => {
                back_rank(Color::White, &mut out);
                pawn_rank(Color::White, &mut out);
                back_rank(Color::Black, &mut out);
                pawn_rank(Color::Black, &mut out);
            }
            Scenario::KingsOnly => {
                kings(&mut out);
            }
            Scenario::PawnWave => {
                kings(&mut out);
                pawn_rank(Color::White, &mut out);
                pawn_rank(Color::Black, &mut out);
            }
            Scenario::RookDuel => {
                kings(&mut out);
                for color in [Color::White, Color::Black] {
                    let rank = color.home_rank();
                    out.push((color, PieceType::Rook, Square::new(0, rank)));
                    out.push((color, PieceType::Rook, Square::new(7, rank)));
                }
            }
            Scenario::Legion => {
                // Full white army against a black king screened by pawns.
                back_rank(Color::White, &mut out);
                pawn_rank(Color::White, &mut out);
                out.push((Color::Black, PieceType::King, Square::new(4, 7)));
                pawn_rank(Color::Black, &mut out);
            }
        }
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Standard => "standard",
            Scenario::KingsOnly => "kings-only",
            Scenario::PawnWave => "pawn-wave",
            Scenario::RookDuel => "rook-duel",
            Scenario::Legion => "legion",
        }
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "standard" => Ok(Scenario::Standard),
            "kings-only" => Ok(Scenario::KingsOnly),
            "pawn-wave" => Ok(Scenario::PawnWave),
            "rook-duel" => Ok(Scenario::RookDuel),
            "legion" => Ok(Scenario::Legion),
            _ => Err(ParseError::UnknownScenario(s.to_string())),
        }
    }
}

fn back_rank(color: Color, out: &mut Vec<(Color, PieceType, Square)>) {
    let order = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];
    let rank = color.home_rank();
    for (file, &kind) in order.iter().enumerate() {
        out.push((color, kind, Square::new(file as i8, rank)));
    }
}

fn pawn_rank(color: Color, out: &mut Vec<(Color, PieceType, Square)>) {
    let rank = color.home_rank() + color.forward();
    for file in 0..8 {
        out.push((color, PieceType::Pawn, Square::new(file, rank)));
    }
}

fn kings(out: &mut Vec<(Color, PieceType, Square)>) {
    out.push((Color::White, PieceType::King, Square::new(4, 0)));
    out.push((Color::Black, PieceType::King, Square::new(4, 7)));
}

/// How a seat drives its cursor. Pointer events are ignored for keyboard
/// seats and vice versa has no effect (keyboard events are always honored).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlMode {
    Keyboard,
    Pointer,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameOptions {
    pub scenario: Scenario,
    /// Color seat one plays; seat two gets the other color.
    pub seat_one_color: Color,
    pub controls: [ControlMode; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            scenario: Scenario::Standard,
            seat_one_color: Color::White,
            controls: [ControlMode::Keyboard, ControlMode::Keyboard],
        }
    }
}

impl GameOptions {
    pub fn color_of(&self, seat: Seat) -> Color {
        match seat {
            Seat::One => self.seat_one_color,
            Seat::Two => self.seat_one_color.other(),
        }
    }

    pub fn seat_of(&self, color: Color) -> Seat {
        if self.color_of(Seat::One) == color {
            Seat::One
        } else {
            Seat::Two
        }
    }

    pub fn control_of(&self, seat: Seat) -> ControlMode {
        self.controls[seat.idx()]
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod scenario_tests;
