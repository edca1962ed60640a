//! workshop-eol-report - End-of-life status report for workshop repos.
//!
//! A single-shot toolbox tool: it scans a project directory for
//! `package.json` manifests, decides which runtimes/libraries to check
//! (Node.js always, plus SQLite/MySQL/React when referenced), queries the
//! endoflife.date API once per product, and prints a JSON report.
//!
//! The tool is driven by the toolbox harness through the `TOOLBOX_ACTION`
//! environment variable (`describe` or `execute`) and a JSON parameter
//! blob on stdin. Everything it prints on stdout is protocol output;
//! diagnostics go to stderr.
//!
//! # Modules
//!
//! - [`toolbox`] - Harness protocol: action dispatch, parameters, describe/execute
//! - [`detection`] - Manifest discovery and product detection heuristics
//! - [`eol`] - endoflife.date API client and report assembly
//! - [`error`] - Error types and result alias

pub mod detection;
pub mod eol;
pub mod error;
pub mod toolbox;

pub use error::{EolReportError, Result};
