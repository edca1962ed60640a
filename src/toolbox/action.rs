//! Invocation mode selection.

use crate::error::{EolReportError, Result};

/// Environment variable the harness sets to select the invocation mode.
pub const ACTION_ENV: &str = "TOOLBOX_ACTION";

/// The two terminal paths of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit the tool descriptor and exit.
    Describe,
    /// Scan the target directory and emit the report.
    Execute,
}

impl Action {
    /// Resolve the action from [`ACTION_ENV`].
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var(ACTION_ENV).ok().as_deref())
    }

    /// Resolve an action value; anything but the two known actions
    /// (including absence) is a usage error.
    pub fn resolve(value: Option<&str>) -> Result<Self> {
        match value {
            Some("describe") => Ok(Action::Describe),
            Some("execute") => Ok(Action::Execute),
            _ => Err(EolReportError::UsageError),
        }
    }
}
