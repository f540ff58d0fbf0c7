//! Error types.
//!
//! Only the runtime-probed parts of a name can fail: the signature
//! calibration and the anonymous-scope marker. Both failures mean rustc
//! formats `core::any::type_name` differently from what the probes assume.

use thiserror::Error;

/// Self-calibration of the raw signature layout failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    /// The sentinel's name does not occur after the prefix hint.
    #[error("sentinel `{sentinel}` not found after offset {hint} in signature `{signature}`")]
    SentinelNotFound {
        sentinel: &'static str,
        signature: &'static str,
        hint: usize,
    },

    /// Two sentinels disagree on the prefix or suffix length.
    #[error(
        "inconsistent calibration: `{sentinel}` gives prefix {found_prefix} / suffix {found_suffix}, \
         expected {expected_prefix} / {expected_suffix}"
    )]
    Inconsistent {
        sentinel: &'static str,
        expected_prefix: usize,
        expected_suffix: usize,
        found_prefix: usize,
        found_suffix: usize,
    },

    /// The calibrated prefix and suffix do not delimit a name in the signature.
    #[error("signature `{signature}` has no name between prefix {prefix_length} and suffix {suffix_length}")]
    OutOfRange {
        signature: &'static str,
        prefix_length: usize,
        suffix_length: usize,
    },
}

/// The anonymous-scope sentinel was not named `<module>::<marker>Crib`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("anonymous-scope sentinel `{name}` does not start with `{prefix}` and end with `{suffix}`")]
    UnexpectedSentinelName {
        name: &'static str,
        prefix: &'static str,
        suffix: &'static str,
    },

    #[error(transparent)]
    Calibration(#[from] CalibrationError),
}

/// Crate-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// A fixed-capacity visitor ran out of room.
    #[error("name needs {required} bytes but the buffer holds {capacity}")]
    CapacityExceeded { capacity: usize, required: usize },

    /// The output sink reported an error.
    #[error("failed to write name to the output sink")]
    Write(#[from] core::fmt::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
