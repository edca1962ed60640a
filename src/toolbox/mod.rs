//! Toolbox harness protocol.
//!
//! The harness drives the tool through the `TOOLBOX_ACTION` environment
//! variable and a JSON parameter blob on stdin. stdout carries protocol
//! output only; all diagnostics go to stderr.
//!
//! # Architecture
//!
//! - [`action`] - Invocation mode resolved once at startup
//! - [`params`] - Execute-mode parameters read from stdin
//! - [`describe`] - Static tool descriptor for harness registration
//! - [`execute`] - The scan-and-report pipeline

pub mod action;
pub mod describe;
pub mod execute;
pub mod params;

pub use action::Action;
pub use describe::descriptor;
pub use execute::ExecuteCommand;
pub use params::ExecuteParams;
