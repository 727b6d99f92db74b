/// Persistence for the occupancy snapshot
///
/// Whitespace-delimited plain text, one occupied slot per line. The codec
/// handles individual lines; the file module handles whole-file load/save.

pub mod codec;
pub mod file;

pub use codec::{format_line, parse_line, LineIssue};
pub use file::{load, save, LoadReport, SkippedLine};
