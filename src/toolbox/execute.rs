//! Execute command: scan, look up, report.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;

use crate::detection::ProductScanner;
use crate::eol::{EolClient, EolReport};
use crate::error::Result;

use super::params::ExecuteParams;

/// The execute path of an invocation.
pub struct ExecuteCommand {
    params: ExecuteParams,
    timeout: Duration,
}

impl ExecuteCommand {
    /// Create an execute command for the given parameters.
    pub fn new(params: ExecuteParams, timeout: Duration) -> Self {
        Self { params, timeout }
    }

    /// Run the scan and write the pretty-printed report to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("scanning {}", self.params.dir.display());

        let products = ProductScanner::scan(&self.params.dir)?;
        let client = EolClient::from_env(self.timeout)?;
        let report = EolReport::collect(&client, &products);

        let rendered = report
            .to_json_pretty()
            .context("Failed to serialize report")?;
        writeln!(out, "{}", rendered)?;
        Ok(())
    }
}
