//! Real-time chess simulation core.
//!
//! Pieces move and fight continuously over simulated time instead of in
//! alternating turns: composite commands are cut into one-square atomic
//! steps, each step takes one unit of progress, and `Game::tick` advances
//! every in-flight step by a fractional delta. The crate owns no clock and
//! does no I/O; callers push `UserInput` events in and read piece state and
//! drained `Message`s out.

pub mod command;
pub mod game;
pub mod history;
pub mod intent;
pub mod message;
pub mod movegen;
pub mod piece;
pub mod scenario;
pub mod square;
pub mod types;

pub use game::Game;
pub use history::{ActionHistory, ActionRecord};
pub use intent::{CastleSide, CommandIntent};
pub use message::{Message, MessageKind};
pub use movegen::possible_moves;
pub use piece::{ActionKind, Composite, Piece, PieceAction, PieceId};
pub use scenario::{ControlMode, GameOptions, Scenario};
pub use square::{intermediate_squares, BoardCoordinate, ParseError, Square};
pub use types::*;

// =============================================================================
// Commander trait — implemented by all input sources (random, scripted, human)
// =============================================================================

/// An input source for one seat, polled once per frame.
///
/// This is how drivers plug into the simulation without the core knowing
/// anything about keyboards, pointers, or bots: a commander inspects the
/// read-only game snapshot and returns the inputs it wants applied before
/// the next tick.
pub trait Commander {
    /// Produce this frame's inputs for `seat`.
    fn frame(&mut self, game: &Game, seat: Seat) -> Vec<UserInput>;

    /// Returns the commander's name for logs and reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new session.
    fn new_session(&mut self) {}
}
