//! Unified error type for the fixture lifecycle.
//!
//! Every failure mode of a `TestParam` run is one of two things: a fixture
//! read a slot that nothing has populated yet, or a comparison came out
//! unequal. Both are surfaced through [`ParamError`] and propagate
//! synchronously out of the lifecycle entry points; nothing is caught or
//! retried internally.
//!
//! Diagnostic lines are always written to the output sink *before* the
//! corresponding error is returned, so a failing run never loses its trace.

use miette::Diagnostic;
use thiserror::Error;

/// Error raised by the fixture lifecycle.
#[derive(Debug, Error, Diagnostic)]
pub enum ParamError {
    /// A slot was read before the corresponding lifecycle step populated it.
    #[error("Value of <{slot}> is not initialized.")]
    #[diagnostic(
        code(testparam::uninitialized),
        help("run the Arrange/Act step (or arm the slot manually) before reading it")
    )]
    Uninitialized {
        /// Display name of the slot ("Expected" or "Actual").
        slot: &'static str,
    },

    /// Expected and actual values differ, or their lengths differ.
    #[error("{message}")]
    #[diagnostic(code(testparam::assertion))]
    Failure { message: String },
}

impl ParamError {
    /// Uninitialized-read error for the named slot.
    pub fn uninitialized(slot: &'static str) -> Self {
        ParamError::Uninitialized { slot }
    }

    /// Comparison failure carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        ParamError::Failure {
            message: message.into(),
        }
    }

    /// True for comparison failures (as opposed to authoring mistakes).
    pub fn is_failure(&self) -> bool {
        matches!(self, ParamError::Failure { .. })
    }
}
