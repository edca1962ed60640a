//! Execute-mode parameters.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{EolReportError, Result};

/// Directory scanned when the harness passes no `dir` parameter.
const DEFAULT_SCAN_DIR: &str = "amp-workshop";

/// Parameters for an execute invocation.
///
/// The harness pipes these as a single JSON object on stdin. Unknown
/// fields are ignored.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ExecuteParams {
    /// Directory to scan for manifests.
    #[serde(default = "default_scan_dir")]
    pub dir: PathBuf,
}

fn default_scan_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SCAN_DIR)
}

impl Default for ExecuteParams {
    fn default() -> Self {
        Self {
            dir: default_scan_dir(),
        }
    }
}

impl ExecuteParams {
    /// Read parameters from a stream until EOF.
    ///
    /// Empty or whitespace-only input means "no parameters" and yields the
    /// defaults. Anything else must parse as a JSON object.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(raw).map_err(|err| EolReportError::ParamsParseError {
            message: err.to_string(),
        })
    }

    /// Read parameters from stdin.
    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(std::io::stdin().lock())
    }
}
