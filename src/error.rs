// Error types for the trip planner

use std::fmt;

use thiserror::Error;

/// What kind of catalog record a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    City,
    Spot,
    TravelMode,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKind::City => write!(f, "City"),
            NotFoundKind::Spot => write!(f, "Tourist spot"),
            NotFoundKind::TravelMode => write!(f, "Travel mode"),
        }
    }
}

/// Error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// User-correctable input problems; nothing was changed
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// A referenced catalog record does not exist
    #[error("{kind} with ID '{id}' not found")]
    NotFound { kind: NotFoundKind, id: String },
    /// Catalog data failed validation while loading
    #[error("Catalog error: {message}")]
    Catalog { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub fn not_found(kind: NotFoundKind, id: impl Into<String>) -> Self {
        PlannerError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        PlannerError::Catalog {
            message: message.into(),
        }
    }

    /// True for errors the user can fix by changing their input
    pub fn is_validation(&self) -> bool {
        matches!(self, PlannerError::Validation { .. })
    }

    /// Message suitable for showing inline to the user
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Validation { reason, .. } => reason.clone(),
            PlannerError::NotFound { kind, .. } => {
                format!("{} is no longer available. Please pick another one.", kind)
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
