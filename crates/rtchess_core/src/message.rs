//! Output events for the presentation layer (sounds, logs, cues).

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Select,
    Unselect,
    Cannot,
    Done,
    StartMove,
    StartAttack,
    StartCastleKingside,
    StartCastleQueenside,
}

/// One emitted event. The game buffers these; the caller drains them each
/// frame. The acting piece keeps a copy in its own log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub color: Color,
    pub piece_type: PieceType,
}
