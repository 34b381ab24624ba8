//! The simulation itself: piece arena, tick engine, and snapshots.
//!
//! Single-threaded and synchronous. The caller applies zero or more inputs
//! per frame and then calls `tick(dt)`. Commands are interpreted against
//! the state as it was before the tick; within a tick, pieces resolve in
//! collection order, which keeps runs with identical input sequences
//! bit-identical for replay.

use crate::history::{ActionHistory, ActionRecord};
use crate::intent::{castle_squares, CastleSide, CommandIntent};
use crate::message::{Message, MessageKind};
use crate::movegen;
use crate::piece::{ActionKind, Composite, Piece, PieceAction, PieceId};
use crate::scenario::GameOptions;
use crate::square::{BoardCoordinate, Square};
use crate::types::{Color, PieceType, Seat, UserInput, ATTACK_DAMAGE};

pub struct Game {
    options: GameOptions,
    pieces: Vec<Piece>,
    next_id: u64,
    cursors: [BoardCoordinate; 2],
    clock: f64,
    messages: Vec<Message>,
    history: ActionHistory,
}

impl Game {
    pub fn new(options: GameOptions) -> Game {
        let layout = options.scenario.layout();
        Game::with_layout(options, &layout)
    }

    /// Build a game from an explicit placement table. Used by the named
    /// scenarios and by tests that need a custom position.
    pub fn with_layout(options: GameOptions, layout: &[(Color, PieceType, Square)]) -> Game {
        let mut cursors = [BoardCoordinate::new(0.0, 0.0); 2];
        for seat in [Seat::One, Seat::Two] {
            let color = options.color_of(seat);
            cursors[seat.idx()] = Square::new(4, color.home_rank()).center();
        }
        let mut game = Game {
            options,
            pieces: Vec::with_capacity(layout.len()),
            next_id: 0,
            cursors,
            clock: 0.0,
            messages: Vec::new(),
            history: ActionHistory::default(),
        };
        for &(color, piece_type, square) in layout {
            game.spawn(color, piece_type, square);
        }
        game
    }

    fn spawn(&mut self, color: Color, piece_type: PieceType, square: Square) {
        debug_assert!(self.index_at(square).is_none(), "square {square} occupied");
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece::new(id, color, piece_type, square));
    }

    // ------------------------------------------------------------------
    // Snapshot queries
    // ------------------------------------------------------------------

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn all_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id && p.is_alive())
    }

    /// The live piece at `square`, if any. Dead pieces awaiting the
    /// end-of-tick sweep are invisible here.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.is_alive() && p.square == square)
    }

    pub(crate) fn index_at(&self, square: Square) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.is_alive() && p.square == square)
    }

    pub fn selected_piece(&self, color: Color) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.is_alive() && p.color == color && p.selected)
    }

    pub(crate) fn selected_index(&self, color: Color) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.is_alive() && p.color == color && p.selected)
    }

    pub(crate) fn piece_mut(&mut self, i: usize) -> &mut Piece {
        &mut self.pieces[i]
    }

    /// True iff no piece has a pending action.
    pub fn is_idle(&self) -> bool {
        self.pieces.iter().all(|p| p.is_idle())
    }

    pub fn cursor_position(&self, seat: Seat) -> BoardCoordinate {
        self.cursors[seat.idx()]
    }

    pub(crate) fn set_cursor(&mut self, seat: Seat, c: BoardCoordinate) {
        self.cursors[seat.idx()] = c;
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn possible_moves(&self, piece: &Piece) -> Vec<Square> {
        movegen::possible_moves(self, piece)
    }

    /// Take everything emitted since the last drain.
    pub fn drain_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    pub fn handle_input(&mut self, input: UserInput) {
        crate::command::handle_input(self, input);
    }

    // ------------------------------------------------------------------
    // Command entry points
    // ------------------------------------------------------------------

    pub(crate) fn emit(&mut self, i: usize, kind: MessageKind) {
        let msg = Message {
            kind,
            color: self.pieces[i].color,
            piece_type: self.pieces[i].piece_type,
        };
        self.pieces[i].log.push(msg);
        self.messages.push(msg);
    }

    /// Queue a composite command for the piece at `idx`, superseding
    /// anything in flight. Decomposition into atomic steps happens here,
    /// once.
    pub(crate) fn enqueue_intent(&mut self, idx: usize, intent: CommandIntent) {
        debug_assert!(
            self.pieces[idx].is_alive(),
            "action queued for a dead piece"
        );
        self.flush_truncated(idx);
        let actions = crate::intent::decompose(&self.pieces[idx], intent);
        let kind = match intent {
            CommandIntent::Move(_) => ActionKind::Move,
            CommandIntent::Attack(_) => ActionKind::Attack,
            CommandIntent::Castle(CastleSide::Kingside) => ActionKind::CastleKingside,
            CommandIntent::Castle(CastleSide::Queenside) => ActionKind::CastleQueenside,
            CommandIntent::Promote(t) => ActionKind::Promote(t),
        };
        let piece = &mut self.pieces[idx];
        piece.enqueue(actions);
        // Castling is recorded once, against the king.
        let track = !matches!(kind, ActionKind::CastleKingside | ActionKind::CastleQueenside)
            || piece.piece_type == PieceType::King;
        piece.composite = track.then_some(Composite {
            kind,
            from: piece.square,
            steps_done: 0,
        });
    }

    // ------------------------------------------------------------------
    // Tick engine
    // ------------------------------------------------------------------

    /// Advance simulated time by `dt`. Every atomic step whose progress
    /// crosses 1.0 is resolved in this call, however large `dt` is; the
    /// remainder carries into the next step of the same composite.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt as f64;
        for i in 0..self.pieces.len() {
            if !self.pieces[i].is_alive() || self.pieces[i].queue.is_empty() {
                continue;
            }
            self.pieces[i].progress += dt;
            while self.pieces[i].is_alive()
                && self.pieces[i].progress >= 1.0
                && !self.pieces[i].queue.is_empty()
            {
                self.pieces[i].progress -= 1.0;
                let action = self.pieces[i].queue.pop_front().expect("queue checked");
                self.resolve(i, action);
            }
            if self.pieces[i].queue.is_empty() {
                self.pieces[i].progress = 0.0;
                self.flush_completed(i);
            }
        }
        self.pieces.retain(|p| p.is_alive());
        debug_assert!(
            self.squares_distinct(),
            "two live pieces share a square after tick"
        );
    }

    fn resolve(&mut self, i: usize, action: PieceAction) {
        match action.kind {
            ActionKind::Move => self.resolve_move(i, action),
            ActionKind::Attack => self.resolve_attack(i, action),
            ActionKind::CastleKingside | ActionKind::CastleQueenside => {
                self.resolve_castle(i, action.kind)
            }
            ActionKind::Promote(target) => {
                self.pieces[i].piece_type = target;
                if let Some(c) = self.pieces[i].composite.as_mut() {
                    c.steps_done += 1;
                }
            }
            // Selection is instantaneous and applied at command time;
            // nothing of this kind is ever queued.
            ActionKind::Select | ActionKind::Unselect => {}
        }
    }

    fn resolve_move(&mut self, i: usize, action: PieceAction) {
        if self.index_at(action.to).is_some() {
            // Another piece moved into the path mid-flight. Halt here so
            // no square ever holds two pieces.
            self.flush_truncated(i);
            self.pieces[i].queue.clear();
            self.pieces[i].progress = 0.0;
            return;
        }
        self.pieces[i].square = action.to;
        self.pieces[i].has_moved = true;
        if let Some(c) = self.pieces[i].composite.as_mut() {
            c.steps_done += 1;
        }
    }

    fn resolve_attack(&mut self, i: usize, action: PieceAction) {
        let defender = self
            .index_at(action.to)
            .filter(|&d| self.pieces[d].color != self.pieces[i].color);
        let Some(d) = defender else {
            // Target is gone (or a friend moved in); the attack fizzles.
            self.flush_truncated(i);
            self.pieces[i].queue.clear();
            self.pieces[i].progress = 0.0;
            return;
        };
        self.pieces[d].health -= ATTACK_DAMAGE;
        if let Some(c) = self.pieces[i].composite.as_mut() {
            c.steps_done += 1;
        }
        if self.pieces[d].health <= 0.0 {
            // Capture: the defender leaves the board at the end of the
            // tick and the attacker moves in now.
            self.pieces[i].square = action.to;
            self.pieces[i].has_moved = true;
            self.pieces[i].kill_count += 1;
            self.pieces[i].queue.clear();
        } else {
            self.pieces[i].queue.push_back(action);
        }
    }

    fn resolve_castle(&mut self, i: usize, kind: ActionKind) {
        let color = self.pieces[i].color;
        let my_id = self.pieces[i].id;
        let side = match kind {
            ActionKind::CastleKingside => CastleSide::Kingside,
            _ => CastleSide::Queenside,
        };
        let sqs = castle_squares(color, side);
        // The partner still has its half of the pair at the queue front.
        let partner = self.pieces.iter().position(|p| {
            p.id != my_id
                && p.is_alive()
                && p.color == color
                && p.queue.front().map_or(false, |a| a.kind == kind)
        });
        let Some(j) = partner else {
            // Partner died mid-castle; abort.
            self.flush_truncated(i);
            self.pieces[i].queue.clear();
            self.pieces[i].progress = 0.0;
            return;
        };
        let (ki, ri) = if self.pieces[i].piece_type == PieceType::King {
            (i, j)
        } else {
            (j, i)
        };
        self.pieces[ki].square = sqs.king_to;
        self.pieces[ri].square = sqs.rook_to;
        for idx in [ki, ri] {
            let p = &mut self.pieces[idx];
            p.has_moved = true;
            p.queue.clear();
            p.progress = 0.0;
        }
        self.pieces[ri].composite = None;
        if let Some(comp) = self.pieces[ki].composite.take() {
            self.history.push(ActionRecord {
                timestamp: self.clock,
                color,
                piece_type: PieceType::King,
                kind,
                from: comp.from,
                to: sqs.king_to,
            });
        }
        self.emit(ki, MessageKind::Done);
    }

    /// Record a composite that finished its whole queue, and say so.
    fn flush_completed(&mut self, i: usize) {
        let Some(comp) = self.pieces[i].composite.take() else {
            return;
        };
        if comp.steps_done == 0 {
            return;
        }
        self.history.push(ActionRecord {
            timestamp: self.clock,
            color: self.pieces[i].color,
            piece_type: self.pieces[i].piece_type,
            kind: comp.kind,
            from: comp.from,
            to: self.pieces[i].square,
        });
        self.emit(i, MessageKind::Done);
    }

    /// Record a composite cut short (blocked path, vanished target, or a
    /// superseding command) with the square actually reached. Composites
    /// that never resolved a step leave no trace.
    fn flush_truncated(&mut self, i: usize) {
        let Some(comp) = self.pieces[i].composite.take() else {
            return;
        };
        if comp.steps_done == 0 {
            return;
        }
        self.history.push(ActionRecord {
            timestamp: self.clock,
            color: self.pieces[i].color,
            piece_type: self.pieces[i].piece_type,
            kind: comp.kind,
            from: comp.from,
            to: self.pieces[i].square,
        });
    }

    fn squares_distinct(&self) -> bool {
        for (n, a) in self.pieces.iter().enumerate() {
            for b in &self.pieces[n + 1..] {
                if a.square == b.square {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
