//! Session Runner for rtchess
//!
//! This crate provides infrastructure for:
//! - Wiring two `Commander`s to a real-time game
//! - Driving fixed-dt frames and draining simulation messages into logs
//! - Exporting the completed action history as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a session with the default config (random vs random, standard board)
//! cargo run -p arena
//!
//! # Run a session described by a TOML config
//! cargo run -p arena -- session.toml
//! ```

mod config;
mod session;

pub use config::*;
pub use session::*;
