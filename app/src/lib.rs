//! Stockroom - Dashboard command boundary
//!
//! The front end renders; Rust owns all state. Every user action calls one
//! command, and the front end re-reads the lists after each successful write.

pub mod commands;
mod state;

pub use state::AppState;

use stockroom_core::{Config, Result};

/// Start logging, open the store and seed it if it is new.
pub fn start(config: Config) -> Result<AppState> {
    stockroom_core::init_logging();

    let state = AppState::new(config)?;
    state.initialize()?;

    tracing::info!("Stockroom started");

    Ok(state)
}
