/// Load and save of the occupancy snapshot file
///
/// The file only ever holds the occupied subset: a slot that empties out and
/// stays empty simply disappears from the file. Saves truncate and rewrite
/// the whole thing; at a couple dozen records there is nothing to batch.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::slot::SlotRecord;
use crate::error::Result;
use crate::storage::codec::{format_line, parse_line, LineIssue};

/// A data-file line that didn't load, with enough context to tell the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the data file
    pub line_no: usize,
    pub issue: LineIssue,
}

/// Everything a load produced: the good records plus the lines it had to skip
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<SlotRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Read the snapshot file.
///
/// A missing file just means no prior state, so it yields an empty report.
/// Bad lines are collected in the report instead of aborting the load.
pub fn load(path: &Path, capacity: usize) -> Result<LoadReport> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadReport::default()),
        Err(e) => return Err(e.into()),
    };

    let mut report = LoadReport::default();
    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, capacity) {
            Ok(record) => report.records.push(record),
            Err(issue) => report.skipped.push(SkippedLine {
                line_no: i + 1,
                issue,
            }),
        }
    }
    Ok(report)
}

/// Rewrite the snapshot file with the occupied slots only.
pub fn save(path: &Path, slots: &[SlotRecord]) -> Result<()> {
    let mut contents = String::new();
    for slot in slots.iter().filter(|s| s.occupied) {
        contents.push_str(&format_line(slot));
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}
