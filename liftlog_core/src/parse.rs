//! Parsers for the three layers of the workout log grammar.
//!
//! A log file is a sequence of day blocks; a day block is a date header
//! followed by exercise lines; an exercise line is a name and a list of
//! set tokens. Each layer has its own parser here, leaves first:
//! `parse_set`, `parse_exercise`, `parse_day`.
//!
//! All three take a [`ParseContext`] so settings like the bodyweight
//! fallback travel explicitly instead of living in a global.

use crate::types::{Exercise, Set, TrainingDay};
use crate::{Error, Result};
use chrono::NaiveDate;

/// Default load, in kilograms, assumed for sets logged without a weight
pub const DEFAULT_BODYWEIGHT: f64 = 75.0;

/// Date format of the day header prefix (e.g. `01/01/1970`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Settings threaded through all parsing layers
#[derive(Clone, Debug)]
pub struct ParseContext {
    /// Load used when a set token has no explicit weight field
    pub bodyweight: f64,
}

impl ParseContext {
    pub fn new(bodyweight: f64) -> Self {
        Self { bodyweight }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            bodyweight: DEFAULT_BODYWEIGHT,
        }
    }
}

/// Parse one set token of the form `AxB` or `AxBxC`
///
/// `A` is the number of sets (or rest-pause clusters), `B` the reps per
/// set, `C` the load in kilograms. The `x` separator is matched
/// case-insensitively. A trailing annotation after the first `" = "` is
/// discarded before parsing, so notes like `"1x5x100 = PR"` are valid.
///
/// The load field is reduced to its digits before parsing, which
/// tolerates inline unit markers such as `"60kg"`. When the load field
/// is absent entirely, the context bodyweight is used. Fields past the
/// third are ignored.
pub fn parse_set(token: &str, ctx: &ParseContext) -> Result<Set> {
    let body = match token.split_once(" = ") {
        Some((before, _annotation)) => before,
        None => token,
    };

    let fields: Vec<&str> = body.split(['x', 'X']).collect();
    if fields.len() < 2 {
        return Err(Error::Format(format!(
            "set '{}' does not match COUNTxREPS[xLOAD]",
            token
        )));
    }

    let times_done = parse_count(fields[0], token)?;
    let reps = parse_count(fields[1], token)?;

    let load = match fields.get(2) {
        Some(raw) => parse_load(raw, token)?,
        None => ctx.bodyweight,
    };

    Ok(Set {
        times_done,
        reps,
        load,
    })
}

/// Parse a count field (times done or reps) as a non-negative integer
fn parse_count(field: &str, token: &str) -> Result<u32> {
    let trimmed = field.trim();
    trimmed.parse::<u32>().map_err(|_| {
        Error::Format(format!("invalid number '{}' in set '{}'", trimmed, token))
    })
}

/// Parse a load field, keeping only its digit characters
fn parse_load(field: &str, token: &str) -> Result<f64> {
    let digits: String = field.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::Format(format!(
            "load '{}' in set '{}' contains no digits",
            field.trim(),
            token
        )));
    }
    let load = digits.parse::<u32>().map_err(|_| {
        Error::Format(format!("invalid load '{}' in set '{}'", field.trim(), token))
    })?;
    Ok(f64::from(load))
}

/// Parse one exercise line of the form `<name> - <set1>, <set2>, ...`
///
/// The first `" - "` separates the name from the comma-separated set
/// tokens; the first set token that fails to parse fails the line.
pub fn parse_exercise(line: &str, ctx: &ParseContext) -> Result<Exercise> {
    let (name, sets_part) = line.split_once(" - ").ok_or_else(|| {
        Error::Format(format!("exercise line '{}' is missing ' - '", line))
    })?;

    if name.trim().is_empty() {
        return Err(Error::Format(format!(
            "exercise line '{}' has an empty name",
            line
        )));
    }

    let sets = sets_part
        .split(", ")
        .map(|token| parse_set(token, ctx))
        .collect::<Result<Vec<Set>>>()?;

    Ok(Exercise {
        name: name.to_string(),
        sets,
    })
}

/// Parse one day block: a date header line plus zero or more exercise lines
///
/// The first 10 characters of the header must be a `DD/MM/YYYY` date.
/// The calisthenics flag is set when the literal `(C)` appears anywhere
/// on the header. Remaining lines that are blank or start with `Total`
/// are skipped; everything else must parse as an exercise line. A block
/// whose body yields no exercises is accepted and totals zero.
pub fn parse_day(block: &str, ctx: &ParseContext) -> Result<TrainingDay> {
    let (header, body) = match block.split_once('\n') {
        Some((header, body)) => (header, body),
        None => (block, ""),
    };

    let prefix = header.get(..10).ok_or_else(|| {
        Error::Format(format!(
            "day header '{}' is too short for a DD/MM/YYYY date",
            header
        ))
    })?;
    let date = NaiveDate::parse_from_str(prefix, DATE_FORMAT)
        .map_err(|e| Error::Format(format!("invalid date '{}': {}", prefix, e)))?;

    let calisthenics = header.contains("(C)");

    let mut exercises = Vec::new();
    for line in body.split('\n') {
        if line.is_empty() || line.starts_with("Total") {
            continue;
        }
        exercises.push(parse_exercise(line, ctx)?);
    }

    Ok(TrainingDay {
        date,
        calisthenics,
        exercises,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_with_explicit_load() {
        let set = parse_set("3x10x60", &ParseContext::default()).unwrap();
        assert_eq!(set.times_done, 3);
        assert_eq!(set.reps, 10);
        assert_eq!(set.load, 60.0);
        assert_eq!(set.total(), 1800.0);
    }

    #[test]
    fn test_set_without_load_uses_bodyweight() {
        let set = parse_set("1x10", &ParseContext::default()).unwrap();
        assert_eq!(set.load, DEFAULT_BODYWEIGHT);
        assert_eq!(set.total(), 750.0);
    }

    #[test]
    fn test_set_uses_context_bodyweight() {
        let set = parse_set("2x5", &ParseContext::new(80.0)).unwrap();
        assert_eq!(set.load, 80.0);
        assert_eq!(set.total(), 800.0);
    }

    #[test]
    fn test_set_uppercase_separator() {
        let set = parse_set("3X10X60", &ParseContext::default()).unwrap();
        assert_eq!(set.total(), 1800.0);
    }

    #[test]
    fn test_set_tolerates_spaces_around_fields() {
        let set = parse_set("3 x 10 x 60", &ParseContext::default()).unwrap();
        assert_eq!(set.total(), 1800.0);
    }

    #[test]
    fn test_set_discards_annotation() {
        let set = parse_set("1x5x100 = new PR", &ParseContext::default()).unwrap();
        assert_eq!(set.times_done, 1);
        assert_eq!(set.reps, 5);
        assert_eq!(set.load, 100.0);
    }

    #[test]
    fn test_set_strips_unit_marker_from_load() {
        let set = parse_set("3x10x60kg", &ParseContext::default()).unwrap();
        assert_eq!(set.load, 60.0);
    }

    #[test]
    fn test_set_ignores_fields_past_the_third() {
        let set = parse_set("3x10x60x999", &ParseContext::default()).unwrap();
        assert_eq!(set.load, 60.0);
    }

    #[test]
    fn test_set_single_field_fails() {
        let err = parse_set("310", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_set_non_numeric_count_fails() {
        let err = parse_set("ax10x60", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_set_empty_reps_fails() {
        let err = parse_set("3xx60", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_set_load_without_digits_fails() {
        let err = parse_set("3x10xheavy", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_exercise_parses_multiple_sets() {
        let exercise =
            parse_exercise("Bench Press - 3x10x60, 1x5x100", &ParseContext::default()).unwrap();
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.sets.len(), 2);
        assert_eq!(exercise.total(), 2300.0);
    }

    #[test]
    fn test_exercise_missing_separator_fails() {
        let err = parse_exercise("Bench Press 1x10x50", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_exercise_empty_name_fails() {
        let err = parse_exercise(" - 3x10x60", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_exercise_bad_set_token_fails() {
        let err = parse_exercise("Squat - 3x10x60, junk", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_day_block_with_total_line() {
        let block = "01/01/1970\nBench Press - 1x10x100, 1x8x100\nSquat - 1x10x50\nTotal 1800";
        let day = parse_day(block, &ParseContext::default()).unwrap();

        assert_eq!(day.date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(!day.calisthenics);
        assert_eq!(day.exercises.len(), 2);
        assert_eq!(day.exercises[0].name, "Bench Press");
        assert_eq!(day.exercises[0].total(), 1800.0);
        assert_eq!(day.exercises[1].name, "Squat");
        assert_eq!(day.exercises[1].total(), 500.0);
        assert_eq!(day.total(), 2300.0);
    }

    #[test]
    fn test_day_skips_blank_lines() {
        let block = "02/03/2024\n\nDeadlift - 1x5x140\n";
        let day = parse_day(block, &ParseContext::default()).unwrap();
        assert_eq!(day.exercises.len(), 1);
        assert_eq!(day.total(), 700.0);
    }

    #[test]
    fn test_day_calisthenics_marker_anywhere_on_header() {
        let ctx = ParseContext::default();
        assert!(parse_day("01/01/1970 (C)", &ctx).unwrap().calisthenics);
        assert!(parse_day("01/01/1970 morning (C)", &ctx).unwrap().calisthenics);
        assert!(!parse_day("01/01/1970 C", &ctx).unwrap().calisthenics);
    }

    #[test]
    fn test_day_with_no_exercises_totals_zero() {
        let day = parse_day("05/05/2024\nTotal 0", &ParseContext::default()).unwrap();
        assert!(day.exercises.is_empty());
        assert_eq!(day.total(), 0.0);
    }

    #[test]
    fn test_day_header_too_short_fails() {
        let err = parse_day("1/1/70", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_day_unparsable_date_fails() {
        let err = parse_day("99/99/1999\nSquat - 1x5x100", &ParseContext::default()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_date_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let header = date.format(DATE_FORMAT).to_string();
        let day = parse_day(&header, &ParseContext::default()).unwrap();
        assert_eq!(day.date, date);
    }
}
