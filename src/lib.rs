//! # Drop Token
//!
//! A two-player Drop Token game on a square board. Tokens fall to the lowest
//! free cell of a column; a player wins by owning an entire row, column, or
//! diagonal. Play happens through a line-based command session or a terminal
//! UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, game engine
//! - [`protocol`]: Command tokenizing/parsing and console rendering
//! - [`session`]: Command loop driving one engine over any reader/writer
//! - [`ui`]: Terminal UI play mode
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod protocol;
pub mod session;
pub mod ui;
