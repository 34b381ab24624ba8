//! Random-Play Commander
//!
//! The simplest possible input source: every few frames it points at one of
//! its movable pieces and orders it to a uniformly random reachable square.
//! Useful for:
//! - Exercising the simulation before smarter drivers exist
//! - Baseline comparisons (any deliberate player should beat this)
//! - Stress testing command interpretation and the tick engine
//!
//! The commander drives a pointer-controlled seat, so sessions wiring it up
//! must set that seat's control mode to `Pointer`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rtchess_core::{Commander, Game, InputKind, Seat, UserInput};

#[cfg(test)]
mod lib_tests;

/// How many frames pass between orders. Roughly one command per second at
/// a 60 fps session cadence.
const DEFAULT_CADENCE: u32 = 60;

/// A commander that issues random legal orders.
///
/// Seeded explicitly so that two sessions built from the same seed produce
/// identical input streams, which keeps whole runs replayable.
#[derive(Debug, Clone)]
pub struct RandomCommander {
    seed: u64,
    rng: StdRng,
    cadence: u32,
    frames: u32,
}

impl RandomCommander {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            cadence: DEFAULT_CADENCE,
            frames: 0,
        }
    }

    /// Override how many frames pass between orders.
    pub fn with_cadence(mut self, cadence: u32) -> Self {
        self.cadence = cadence.max(1);
        self
    }
}

impl Commander for RandomCommander {
    fn frame(&mut self, game: &Game, seat: Seat) -> Vec<UserInput> {
        self.frames += 1;
        if self.frames % self.cadence != 0 {
            return Vec::new();
        }

        let color = game.options().color_of(seat);
        let candidates: Vec<_> = game
            .all_pieces()
            .iter()
            .filter(|p| p.color == color && p.is_idle())
            .filter_map(|p| {
                let targets = game.possible_moves(p);
                if targets.is_empty() {
                    None
                } else {
                    Some((p.square, targets))
                }
            })
            .collect();

        let Some((from, targets)) = candidates.choose(&mut self.rng) else {
            return Vec::new();
        };
        let to = targets.choose(&mut self.rng).copied().expect("non-empty");

        // Point at the piece, grab it, point at the target, release the
        // order. A pawn sitting on its promotion rank promotes on the first
        // press instead, which is exactly what we want from it.
        vec![
            UserInput::pointer(InputKind::PointerMove, seat, from.center()),
            UserInput::new(InputKind::PointerPrimaryDown, seat),
            UserInput::pointer(InputKind::PointerMove, seat, to.center()),
            UserInput::new(InputKind::PointerPrimaryDown, seat),
        ]
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_session(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.frames = 0;
    }
}
