//! Error taxonomy of the crate.
//!
//! Fallible operations return [`anyhow::Result`] and carry a [`LocusError`]
//! so that callers can tell bad input from bad configuration with
//! `err.downcast_ref::<LocusError>()`. Broken internal invariants are not
//! represented here: they panic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocusError {
    /// Unparseable interval token, or an interval that does not fit the
    /// contig it names.
    #[error("Malformed input '{token}': {msg}")]
    MalformedInput { token: String, msg: String },

    /// Request that cannot be satisfied with the supplied data (empty
    /// intersection, too many partitions, mismatched part counts).
    #[error("Invalid configuration: {0}")]
    UserConfiguration(String),
}

impl LocusError {
    pub fn malformed(
        token: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            token: token.into(),
            msg:   msg.into(),
        }
    }

    pub fn user_config(msg: impl Into<String>) -> Self {
        Self::UserConfiguration(msg.into())
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    pub fn is_user_configuration(&self) -> bool {
        matches!(self, Self::UserConfiguration(_))
    }
}

/// Returns early with a [`LocusError::UserConfiguration`] wrapped into
/// [`anyhow::Error`].
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err(anyhow::Error::new($crate::error::LocusError::user_config(format!($($arg)*))))
    };
}
