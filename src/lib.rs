//! # Connect Four
//!
//! Rules engine for two-player Connect Four with a terminal UI built on
//! Ratatui. The engine has no rendering dependency and can be driven headless.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, game state
//! - [`ui`] — Terminal UI: game view and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
