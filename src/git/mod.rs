pub mod log;

pub use log::{collect_activity, collect_or_report, parse_activity, GitLog, LogOutput, FATAL_MARKER};
