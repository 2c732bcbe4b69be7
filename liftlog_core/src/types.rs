//! Core domain types for the liftlog system.
//!
//! This module defines the three-layer workout model:
//! - Sets (count x reps x load)
//! - Exercises (a named, ordered group of sets)
//! - Training days (a dated, ordered group of exercises)
//!
//! Total load is never stored. Each layer exposes a `total()` method that
//! folds over its children, so a record can never disagree with its parts.

use chrono::NaiveDate;

/// A single set entry: how many times it was done, for how many reps,
/// at what load (kilograms).
#[derive(Clone, Debug, PartialEq)]
pub struct Set {
    /// Number of sets (or rest-pause clusters) performed
    pub times_done: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms; bodyweight when the log omitted it
    pub load: f64,
}

impl Set {
    /// Total load moved by this entry: times_done * reps * load
    pub fn total(&self) -> f64 {
        f64::from(self.times_done) * f64::from(self.reps) * self.load
    }
}

/// A named exercise and the sets performed for it on one day
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: Vec<Set>,
}

impl Exercise {
    /// Sum of the totals of all sets
    pub fn total(&self) -> f64 {
        self.sets.iter().map(Set::total).sum()
    }
}

/// One dated workout: every exercise logged under a single date header
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingDay {
    pub date: NaiveDate,
    /// True when the date header carried a `(C)` calisthenics marker
    pub calisthenics: bool,
    pub exercises: Vec<Exercise>,
}

impl TrainingDay {
    /// Sum of the totals of all exercises
    pub fn total(&self) -> f64 {
        self.exercises.iter().map(Exercise::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_total_is_product() {
        let set = Set {
            times_done: 3,
            reps: 10,
            load: 60.0,
        };
        assert_eq!(set.total(), 1800.0);
    }

    #[test]
    fn test_exercise_total_sums_sets() {
        let exercise = Exercise {
            name: "Bench Press".into(),
            sets: vec![
                Set {
                    times_done: 3,
                    reps: 10,
                    load: 60.0,
                },
                Set {
                    times_done: 1,
                    reps: 5,
                    load: 100.0,
                },
            ],
        };
        assert_eq!(exercise.total(), 1800.0 + 500.0);
    }

    #[test]
    fn test_day_total_sums_exercises() {
        let day = TrainingDay {
            date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            calisthenics: false,
            exercises: vec![
                Exercise {
                    name: "Bench Press".into(),
                    sets: vec![Set {
                        times_done: 3,
                        reps: 10,
                        load: 60.0,
                    }],
                },
                Exercise {
                    name: "Squat".into(),
                    sets: vec![Set {
                        times_done: 1,
                        reps: 5,
                        load: 100.0,
                    }],
                },
            ],
        };
        assert_eq!(day.total(), 2300.0);
    }

    #[test]
    fn test_empty_day_total_is_zero() {
        let day = TrainingDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            calisthenics: true,
            exercises: vec![],
        };
        assert_eq!(day.total(), 0.0);
    }
}
