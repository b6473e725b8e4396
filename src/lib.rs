//! # Connect Four
//!
//! A Connect Four game with a computer opponent driven by a depth-limited,
//! line-counting heuristic search. Candidate columns are evaluated in
//! parallel at every decision node, each branch on its own private board
//! copy. The terminal UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board geometry, player, state machine
//! - [`ai`] — Heuristic scorer, parallel search engine, agent trait
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
