//! Buildstats - gather and summarize per-target build resource usage
//!
//! A CI build wrapper drops one small `*.timing` CSV file next to every
//! compiled target, recording elapsed time, peak memory, and output file
//! size. This crate scans a build tree for those files, validates each one,
//! merges the valid records into a single aggregate CSV, and later re-reads
//! that aggregate with a typed column schema for summary reporting.

pub mod aggregate;
pub mod cli;
pub mod column;
pub mod gather;
pub mod record;
pub mod scan;
pub mod summary;
pub mod table;
