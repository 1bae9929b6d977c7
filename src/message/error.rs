//! Error types for message validation.

use thiserror::Error;

/// Error raised when a builder is serialized in an invalid state.
///
/// Setters never fail; every rule is checked when `serialize` runs and the
/// first violated rule is reported. No partial document is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field was never set.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// Wire name of the missing field
        field: &'static str,
    },

    /// A string field exceeds the platform's character cap.
    #[error("Field '{field}' exceeds the maximum length of {limit} characters")]
    FieldTooLong {
        /// Wire name of the offending field
        field: &'static str,
        /// Maximum allowed length in characters
        limit: usize,
    },

    /// Neither text content nor a satisfying embed/field list is present.
    #[error("Missing content: a message needs content or an embed, an embed needs a description or a field")]
    MissingContent,

    /// `SUPPRESS_EMBEDS` was combined with a non-empty embed list.
    #[error("The SUPPRESS_EMBEDS flag cannot be used with embeds")]
    IncompatibleFlag,

    /// The message carries more embeds than the configured cap allows.
    #[error("Too many embeds: {count} (maximum {limit})")]
    TooManyEmbeds {
        /// Number of embeds on the message
        count: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl ValidationError {
    /// Creates a `MissingRequiredField` error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Creates a `FieldTooLong` error.
    #[must_use]
    pub const fn too_long(field: &'static str, limit: usize) -> Self {
        Self::FieldTooLong { field, limit }
    }
}

/// Fails with [`ValidationError::FieldTooLong`] if `value` has more than
/// `limit` characters.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    limit: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        return Err(ValidationError::too_long(field, limit));
    }
    Ok(())
}

/// Like [`check_length`] for optional values; `None` always passes.
pub(crate) fn check_optional_length(
    field: &'static str,
    value: Option<&str>,
    limit: usize,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check_length(field, v, limit))
}

/// Returns the value of a required field or a `MissingRequiredField` error.
pub(crate) fn require<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    value.ok_or(ValidationError::missing(field))
}
