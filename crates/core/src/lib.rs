//! Recall Core Library
//!
//! This crate provides the core functionality for recall, a terminal tool for
//! picking a previously memorized shell command. Users narrow the command list
//! with fuzzy search and, when a command carries `{{name}}` placeholders, fill
//! each one in before the final command string is emitted.
//!
//! # Key Features
//!
//! - **Memory Catalog**: Parse the YAML list of memorized commands
//! - **Fuzzy Matching**: Score and rank memories against free-text queries
//! - **Match Caching**: Skip re-ranking when the query has not changed
//! - **Placeholder Templating**: Find `{{name}}` markers and substitute values
//! - **Configuration Management**: Resolve options from flags, env and defaults
//! - **Error Handling**: Error types for all startup failure modes
//!
//! # Examples
//!
//! Loading memories from a configuration file:
//!
//! ```no_run
//! use recall_core::file_handling::get_memories;
//!
//! let memories = get_memories("~/.config/recall/memories.yml")?;
//! for memory in &memories {
//!     println!("{}: {}", memory.command, memory.description);
//! }
//! # Ok::<(), recall_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod match_cache;
pub mod matching;
pub mod memories;
pub mod placeholders;
