//! # Drop Four
//!
//! Connect Four rules engine with a terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, engine
//! - [`ui`] — Terminal UI driving the engine
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
