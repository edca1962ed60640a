//! Tool descriptor for harness registration.

use serde_json::{json, Value};

/// Tool name the harness registers.
pub const TOOL_NAME: &str = "workshop_eol_report";

/// One-line description shown to the agent.
const TOOL_DESCRIPTION: &str =
    "Scan the repo and report EOL status for nodejs and common runtimes (sqlite, mysql, react).";

/// The static descriptor emitted by a describe invocation.
///
/// The input schema declares `dir` as an optional string; the shape is
/// part of the harness contract and is spelled out literally rather than
/// derived.
pub fn descriptor() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": TOOL_DESCRIPTION,
        "inputSchema": {
            "type": "object",
            "properties": {
                "dir": { "type": "string" }
            },
            "required": []
        }
    })
}
