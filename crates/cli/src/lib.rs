//! Recall CLI Library
//!
//! This crate provides the terminal interface for recall. The `rcl` binary
//! shows a two-page flow: a selection page where typed text fuzzy-filters the
//! memorized commands, and an edit page where each `{{name}}` placeholder of
//! the chosen command is filled in. The final command is printed on stdout so
//! it can be consumed with command substitution:
//!
//! ```bash
//! $(rcl)
//! eval "$(rcl --edit-placeholders)"
//! ```
//!
//! # Architecture
//!
//! - [`cli_args`]: clap argument definitions
//! - [`app`]: the interaction state machine, a pure value-in/value-out
//!   transition function over [`app::Event`]s
//! - [`view`]: page-appropriate textual rendering of an [`app::App`]
//! - [`tui`]: the crossterm event loop driving the state machine

pub mod app;
pub mod cli_args;
pub mod tui;
pub mod view;
