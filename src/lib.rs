//! # Connect Four
//!
//! Rules engine for two-player Connect Four on the standard 7×6 board, with a
//! terminal front-end built with Ratatui that observes the engine's events.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, engine, events
//! - [`ui`] — Terminal UI: game view driven by engine notifications
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
