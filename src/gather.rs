//! The `gather` subcommand: scan a build tree and aggregate timing records.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::aggregate::AggregateTable;
use crate::record::{self, TimingRecord};
use crate::scan;

/// Read every valid timing record under `base_dir`.
///
/// The scanned file list is sorted so output is deterministic across
/// filesystems. Files that fail to parse or validate are reported on stderr
/// (unless `quiet`) and dropped; one bad file never aborts the batch.
pub fn read_all_valid_timing_records(base_dir: &Path, quiet: bool) -> Result<Vec<TimingRecord>> {
    let mut timing_files = scan::find_timing_files(base_dir)?;
    timing_files.sort();
    tracing::debug!(
        count = timing_files.len(),
        base_dir = %base_dir.display(),
        "scanned build tree"
    );

    let mut records = Vec::new();
    for relative in timing_files {
        let path = base_dir.join(&relative);
        match record::read_timing_record(&path) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(file = %path.display(), "skipping invalid timing file");
                if !quiet {
                    eprintln!("{}", err);
                }
            }
        }
    }
    Ok(records)
}

/// Run the `gather` subcommand end to end
pub fn run(output_file: &Path, base_dir: &Path, quiet: bool) -> Result<()> {
    if !base_dir.is_dir() {
        bail!(
            "base directory '{}' does not exist or is not a directory",
            base_dir.display()
        );
    }

    let records = read_all_valid_timing_records(base_dir, quiet)?;
    let table = AggregateTable::from_records(&records);
    table
        .write_csv(output_file)
        .with_context(|| format!("failed to write '{}'", output_file.display()))?;

    println!(
        "Wrote {} records ({} columns) to {}",
        table.num_rows(),
        table.num_columns(),
        output_file.display()
    );
    Ok(())
}
