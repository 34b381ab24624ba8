//! Piece state: identity, health, and the queue of pending atomic actions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::square::Square;
use crate::types::{Color, PieceType, MAX_HEALTH};

/// Unique piece identity, handed out by the owning `Game`'s counter at
/// creation time. Stable across captures, so external layers can track a
/// piece without holding references into the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u64);

/// What a single queued action does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    Attack,
    CastleKingside,
    CastleQueenside,
    Select,
    Unselect,
    Promote(PieceType),
}

/// One atomic action. For `Move` and `Attack` the from/to squares are
/// adjacent under the acting piece's movement rule: a single straight or
/// diagonal step, which also covers both legs of a decomposed knight leap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceAction {
    pub color: Color,
    pub piece_type: PieceType,
    pub kind: ActionKind,
    pub from: Square,
    pub to: Square,
}

impl PieceAction {
    pub fn new(color: Color, piece_type: PieceType, kind: ActionKind, from: Square, to: Square) -> Self {
        if matches!(kind, ActionKind::Move | ActionKind::Attack) {
            debug_assert!(
                from != to
                    && (from.file - to.file).abs() <= 1
                    && (from.rank - to.rank).abs() <= 1,
                "non-atomic step {from} -> {to}"
            );
        }
        Self {
            color,
            piece_type,
            kind,
            from,
            to,
        }
    }
}

/// Bookkeeping for the user-level composite command a piece is executing,
/// kept so the history records one entry per composite rather than one per
/// atomic step.
#[derive(Clone, Copy, Debug)]
pub struct Composite {
    pub kind: ActionKind,
    pub from: Square,
    pub steps_done: u32,
}

#[derive(Clone, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub piece_type: PieceType,
    pub square: Square,
    pub health: f32,
    pub max_health: f32,
    pub selected: bool,
    /// Cleared castle rights once the piece has moved at all.
    pub has_moved: bool,
    pub kill_count: u32,
    /// Pending atomic actions, front first.
    pub queue: VecDeque<PieceAction>,
    /// Fractional progress of the action in flight, in [0, 1).
    pub progress: f32,
    /// The composite command behind the current queue, if any.
    pub composite: Option<Composite>,
    /// Append-only log of recent outcomes for the UI to surface.
    pub log: Vec<Message>,
}

impl Piece {
    pub fn new(id: PieceId, color: Color, piece_type: PieceType, square: Square) -> Self {
        Self {
            id,
            color,
            piece_type,
            square,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            selected: false,
            has_moved: false,
            kill_count: 0,
            queue: VecDeque::new(),
            progress: 0.0,
            composite: None,
            log: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Replace everything queued with a new run of atomic actions. A new
    /// command always supersedes whatever is in flight; progress restarts.
    pub fn enqueue(&mut self, actions: Vec<PieceAction>) {
        self.queue.clear();
        self.progress = 0.0;
        self.queue.extend(actions);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.progress = 0.0;
        self.composite = None;
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
