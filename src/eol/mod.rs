//! endoflife.date API client and report assembly.

pub mod client;
pub mod report;

pub use client::EolClient;
pub use report::EolReport;
