//! Fixed-dt session loop wiring commanders to a game.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rtchess_core::{Color, Commander, Game, MessageKind, Seat};

use crate::config::SessionConfig;

/// What a finished session looked like, for reports and regression checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub frames_run: u32,
    /// Simulated seconds elapsed.
    pub clock: f64,
    pub white_pieces: u32,
    pub black_pieces: u32,
    /// Captures made by pieces still standing at the end.
    pub white_kills: u32,
    pub black_kills: u32,
    pub actions_recorded: usize,
}

/// Owns a game and its two input sources and drives them frame by frame.
pub struct SessionRunner {
    game: Game,
    commanders: [Box<dyn Commander>; 2],
    dt: f32,
}

impl SessionRunner {
    pub fn new(config: &SessionConfig, mut commanders: [Box<dyn Commander>; 2]) -> Self {
        for c in commanders.iter_mut() {
            c.new_session();
        }
        Self {
            game: Game::new(config.game_options()),
            commanders,
            dt: config.dt,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run `frames` fixed-dt frames and summarize the aftermath.
    pub fn run(&mut self, frames: u32) -> SessionReport {
        info!(
            seat_one = self.commanders[0].name(),
            seat_two = self.commanders[1].name(),
            frames,
            "session start"
        );
        for _ in 0..frames {
            self.step();
        }
        let report = self.report(frames);
        info!(
            white = report.white_pieces,
            black = report.black_pieces,
            actions = report.actions_recorded,
            "session over"
        );
        report
    }

    fn step(&mut self) {
        for seat in [Seat::One, Seat::Two] {
            let inputs = self.commanders[seat.idx()].frame(&self.game, seat);
            for input in inputs {
                self.game.handle_input(input);
            }
        }
        self.game.tick(self.dt);
        for msg in self.game.drain_messages() {
            match msg.kind {
                MessageKind::Cannot => {
                    debug!(color = ?msg.color, piece = ?msg.piece_type, "refused order")
                }
                kind => debug!(color = ?msg.color, piece = ?msg.piece_type, ?kind, "event"),
            }
        }
    }

    fn report(&self, frames_run: u32) -> SessionReport {
        let census = |color: Color| {
            self.game
                .all_pieces()
                .iter()
                .filter(|p| p.color == color)
                .fold((0u32, 0u32), |(n, kills), p| (n + 1, kills + p.kill_count))
        };
        let (white_pieces, white_kills) = census(Color::White);
        let (black_pieces, black_kills) = census(Color::Black);
        SessionReport {
            frames_run,
            clock: self.game.clock(),
            white_pieces,
            black_pieces,
            white_kills,
            black_kills,
            actions_recorded: self.game.history().records().len(),
        }
    }

    /// Write the action history as pretty JSON.
    pub fn write_history(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self.game.history())
            .context("serializing action history")?;
        fs::write(path, json)
            .with_context(|| format!("writing action history to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
