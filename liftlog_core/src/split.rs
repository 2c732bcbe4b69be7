//! Whole-file log handling: cleanup passes and the day-block splitter.
//!
//! Raw log text goes through two cleanup passes before parsing. Rest-pause
//! bracket markup is dropped globally, and comment blocks are removed.
//! The cleaned text is then split on blank lines into day blocks, each
//! handed to [`parse_day`](crate::parse::parse_day).

use crate::parse::{parse_day, ParseContext};
use crate::types::TrainingDay;
use crate::Result;

/// Remove all `[` and `]` characters from the log text
///
/// Brackets group rest-pause segments visually. Each segment inside a
/// bracket is already its own comma-separated set token, so dropping the
/// brackets changes no total.
pub fn strip_rest_pause(text: &str) -> String {
    text.chars().filter(|c| *c != '[' && *c != ']').collect()
}

/// Remove comment blocks from the log text
///
/// A comment block is a run of consecutive lines starting with `*`. The
/// whole run is dropped, along with at most one blank line directly after
/// it, so a comment sitting between two day blocks leaves exactly one
/// blank separator behind.
pub fn strip_comments(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        if lines[i].starts_with('*') {
            while i < lines.len() && lines[i].starts_with('*') {
                i += 1;
            }
            if i < lines.len() && lines[i].is_empty() {
                i += 1;
            }
        } else {
            kept.push(lines[i]);
            i += 1;
        }
    }

    kept.join("\n")
}

/// Parse a full log file's text into training days
///
/// Applies both cleanup passes, splits on blank lines, and parses every
/// resulting block. The first block that fails aborts the whole call, so
/// a malformed file never yields a partial result.
pub fn parse_log(text: &str, ctx: &ParseContext) -> Result<Vec<TrainingDay>> {
    let cleaned = strip_comments(&strip_rest_pause(text));

    let days = cleaned
        .split("\n\n")
        .map(|block| parse_day(block, ctx))
        .collect::<Result<Vec<TrainingDay>>>()?;

    tracing::debug!("Parsed {} training days", days.len());
    Ok(days)
}
