//! Table-driven grading functions. Pure and total over f64: every input maps
//! to a band, including negatives.
//!
//! `grade_by_count` and `grade_penalty` return their outermost band for
//! values at or below zero (5 and -5 respectively). Flagged for review with
//! the grading policy owners; do not silently change the bands.

/// Grades a percentage-valued metric. The top band is strict (> 95); every
/// other band is inclusive on its lower edge.
pub fn grade_by_percentage(value: f64) -> i32 {
    if value > 95.0 {
        5
    } else if (90.0..=95.0).contains(&value) {
        4
    } else if (80.0..90.0).contains(&value) {
        3
    } else if (70.0..80.0).contains(&value) {
        2
    } else if (60.0..70.0).contains(&value) {
        1
    } else if (50.0..60.0).contains(&value) {
        0
    } else {
        -1
    }
}

/// Grades a count-valued metric into the 1..=5 range.
pub fn grade_by_count(value: f64) -> i32 {
    if value > 0.0 && value <= 2.0 {
        1
    } else if (3.0..=4.0).contains(&value) {
        2
    } else if (5.0..=6.0).contains(&value) {
        3
    } else if (7.0..=9.0).contains(&value) {
        4
    } else {
        5
    }
}

/// Grades a penalty-valued metric into the -5..=-1 range.
pub fn grade_penalty(value: f64) -> i32 {
    if value > 0.0 && value <= 10.0 {
        -1
    } else if (11.0..=20.0).contains(&value) {
        -2
    } else if (21.0..=30.0).contains(&value) {
        -3
    } else if (31.0..=40.0).contains(&value) {
        -4
    } else {
        -5
    }
}
