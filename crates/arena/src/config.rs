//! Session configuration, loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use rtchess_core::{Color, ControlMode, GameOptions, Scenario};

/// Everything needed to reproduce a session: the board, the seats, the
/// frame cadence, and the commander seeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub scenario: Scenario,
    /// Color seat one plays; seat two gets the other color.
    pub seat_one_color: Color,
    pub controls: [ControlMode; 2],
    /// Simulated seconds per frame.
    pub dt: f32,
    /// Frames to run before the session stops.
    pub frames: u32,
    /// RNG seed per seat's commander.
    pub seeds: [u64; 2],
    /// Where to write the action history JSON, if anywhere.
    pub history_out: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Standard,
            seat_one_color: Color::White,
            // Commanders drive pointer seats.
            controls: [ControlMode::Pointer, ControlMode::Pointer],
            dt: 1.0 / 60.0,
            frames: 3600,
            seeds: [1, 2],
            history_out: None,
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> anyhow::Result<SessionConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading session config {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing session config {}", path.display()))
    }

    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            scenario: self.scenario,
            seat_one_color: self.seat_one_color,
            controls: self.controls,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
