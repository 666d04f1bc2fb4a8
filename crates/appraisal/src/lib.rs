//! Faculty appraisal scoring and report-population engine.
//!
//! The crate turns a multi-sheet activity workbook into a populated appraisal
//! report: category rules filter the sheets down to one faculty member, grade
//! the rows, accumulate the five top-level score buckets, and project detail
//! rows plus totals into the report document tables.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
