#![forbid(unsafe_code)]

//! Core domain model and parsing logic for the liftlog system.
//!
//! This crate provides:
//! - Domain types (sets, exercises, training days) with derived totals
//! - The three-layer log parser (set, exercise, day)
//! - Whole-file cleanup and day-block splitting
//! - Configuration loading
//! - CSV export of per-day totals

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod parse;
pub mod split;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use parse::{parse_day, parse_exercise, parse_set, ParseContext, DATE_FORMAT, DEFAULT_BODYWEIGHT};
pub use split::{parse_log, strip_comments, strip_rest_pause};
pub use report::write_day_totals;
