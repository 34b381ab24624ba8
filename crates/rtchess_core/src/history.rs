//! Timestamped record of completed composite actions.
//!
//! One entry per user-level command that resolved at least one step, never
//! one per atomic step. External notation/persistence layers consume this
//! to reconstruct the game textually.

use serde::{Deserialize, Serialize};

use crate::piece::ActionKind;
use crate::square::Square;
use crate::types::{Color, PieceType};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Simulated time at which the composite finished.
    pub timestamp: f64,
    pub color: Color,
    pub piece_type: PieceType,
    pub kind: ActionKind,
    pub from: Square,
    /// Square actually reached; for a composite halted early this is where
    /// the piece stopped, not the original target.
    pub to: Square,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionHistory {
    records: Vec<ActionRecord>,
}

impl ActionHistory {
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// PGN-like textual reconstruction: one timestamped long-algebraic
    /// line per record.
    pub fn movetext(&self) -> String {
        let mut out = String::new();
        for r in &self.records {
            let side = match r.color {
                Color::White => "W",
                Color::Black => "B",
            };
            let body = match r.kind {
                ActionKind::CastleKingside => "O-O".to_string(),
                ActionKind::CastleQueenside => "O-O-O".to_string(),
                ActionKind::Promote(target) => {
                    format!("{}={}", r.to, target.letter())
                }
                ActionKind::Attack => {
                    format!("{}{}x{}", r.piece_type.letter(), r.from, r.to)
                }
                _ => format!("{}{}-{}", r.piece_type.letter(), r.from, r.to),
            };
            out.push_str(&format!("{:.1} {side} {body}\n", r.timestamp));
        }
        out
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
