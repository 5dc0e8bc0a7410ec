//! FRC command-line client library
//!
//! Looks up FIRST Robotics Competition teams, events and matches on
//! The Blue Alliance and prints them as terminal reports.
//!
//! ## Features
//!
//! - **Key resolution**: turn loose identifiers (`254`, `mo`, `qf 3 round 1`)
//!   into canonical TBA keys before any request is made
//! - **Record formatting**: full reports or a single named data point
//! - **Terminal rendering**: colored, aligned output that degrades to plain text
//!
//! ## Quick Start
//!
//! ```rust
//! use frc_cli::{keys::resolve_match_key, Year};
//!
//! let key = resolve_match_key(None, Year::new(2024), "mo", "qf", 3, 1)?;
//! assert_eq!(key.to_string(), "2024mo_qf3m1");
//! # Ok::<(), frc_cli::FrcError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod keys;
pub mod render;
pub mod tba;

pub use cli::types::{CompLevel, EventKey, MatchKey, TeamKey, Year};
pub use error::{FrcError, Result};
pub use format::{Record, RecordKind, Report};
