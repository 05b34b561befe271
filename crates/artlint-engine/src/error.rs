//! Fatal engine errors.
//!
//! Per-rule failures are never fatal; they surface as
//! [`RuleError`](crate::report::RuleError) entries in the run report. The
//! only error that aborts a run is a malformed document, because the object
//! index built from it could not be trusted by any rule.

use thiserror::Error;

/// Errors that abort a lint run before any rule executes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The document tree violates a structural invariant.
    #[error("malformed document at {path}: {reason}")]
    DocumentMalformed {
        /// Path to the offending layer, e.g. "layers[0].children[2]".
        path: String,
        /// What was wrong with it.
        reason: String,
    },
}
