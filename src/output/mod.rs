//! Output module for rendering crawl results
//!
//! This module turns the occurrence map produced by the crawler into the
//! human-readable pages report printed at the end of a run.

mod report;

pub use report::{format_report, report_lines};
