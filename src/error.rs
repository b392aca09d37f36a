//! Error types shared by validation, the engine and the HTTP layer.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type RobotResult<T> = Result<T, RobotError>;

/// Coarse classification of a [`RobotError`].
///
/// The HTTP layer picks a status code from this, never from the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed initialization input.
    ShapeValidation,
    /// A start position or resulting position outside the room.
    OutOfBounds,
    /// A command string that is empty or has unknown symbols.
    InvalidSyntax,
    /// Commands executed before any successful initialization.
    Uninitialized,
    /// Any other internal fault.
    Unexpected,
}

/// Every failure the robot service can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// One or more initialization fields failed their rules.
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("The robot can not start from outside the room")]
    StartOutsideRoom,

    /// The command sequence ended outside the room; nothing was committed.
    #[error("The robot walked outside the room bounds.")]
    WalkedOutsideRoom,

    #[error("The commands can not be null or empty")]
    EmptyCommands,

    #[error("The commands can not contain characters other than L, R and F")]
    InvalidCommandSymbol {
        /// The first offending character.
        symbol: char,
    },

    #[error("The robot has not been initialized")]
    Uninitialized,

    /// Internal error (should not happen in normal operation).
    #[error("{0}")]
    Internal(String),
}

impl RobotError {
    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the kind used to route this error to a response.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ShapeValidation,
            Self::StartOutsideRoom | Self::WalkedOutsideRoom => ErrorKind::OutOfBounds,
            Self::EmptyCommands | Self::InvalidCommandSymbol { .. } => ErrorKind::InvalidSyntax,
            Self::Uninitialized => ErrorKind::Uninitialized,
            Self::Internal(_) => ErrorKind::Unexpected,
        }
    }
}

/// A single violated validation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Human-readable field name, e.g. `"Width"`.
    pub field: &'static str,
    /// Full message, already naming the field.
    pub message: String,
}

/// Aggregated validation failures, rendered one message per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether any rule on `field` was violated.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Turns the collected failures into a result: `Ok` when nothing was pushed.
    pub fn into_result(self) -> RobotResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(RobotError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_join_with_newlines() {
        let mut errors = ValidationErrors::new();
        errors.push("Width", "Width can not be negative");
        errors.push("Depth", "Depth can not be negative");

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeValidation);
        assert_eq!(
            err.to_string(),
            "Width can not be negative\nDepth can not be negative"
        );
    }

    #[test]
    fn empty_validation_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn kinds_route_by_variant() {
        assert_eq!(RobotError::StartOutsideRoom.kind(), ErrorKind::OutOfBounds);
        assert_eq!(RobotError::WalkedOutsideRoom.kind(), ErrorKind::OutOfBounds);
        assert_eq!(RobotError::EmptyCommands.kind(), ErrorKind::InvalidSyntax);
        assert_eq!(
            RobotError::InvalidCommandSymbol { symbol: 'x' }.kind(),
            ErrorKind::InvalidSyntax
        );
        assert_eq!(RobotError::Uninitialized.kind(), ErrorKind::Uninitialized);
        assert_eq!(RobotError::internal("boom").kind(), ErrorKind::Unexpected);
        assert_eq!(RobotError::internal("boom").to_string(), "boom");
    }
}
