use thiserror::Error;

/// Result type alias using PaddleXError
pub type Result<T> = std::result::Result<T, PaddleXError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that leaves a crate boundary is classified by one of these
/// kinds. The HTTP layer maps kinds to status codes and the logging facility
/// records the stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Client-correctable
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Infrastructure
    Persistence,
    Serialization,
    Timeout,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller can fix the failure by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::NotFound | ExErrorKind::AlreadyExists
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for debugging. Storage
/// operations return this type directly; domain errors convert into it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (the paddle business identifier)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the offending input field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (paddle_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for PaddleX operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaddleXError {
    /// A submission field failed validation
    #[error("invalid {}: {reason}", section_of(.field))]
    Validation { field: String, reason: String },

    /// A supplied business identifier is unusable
    #[error("{reason}")]
    InvalidPaddleId { reason: String },

    /// No paddle carries the requested business identifier
    #[error("Paddle not found: {paddle_id}")]
    PaddleNotFound { paddle_id: String },

    /// A paddle with the same business identifier is already stored
    #[error("Paddle with ID {paddle_id} already exists")]
    AlreadyExists { paddle_id: String },

    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PaddleXError {
    /// Build a validation error for `field` (dotted path, e.g. `specs.shape`)
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PaddleXError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Leading segment of a dotted field path: `specs.core` -> `specs`
fn section_of(field: &str) -> &str {
    field.split('.').next().unwrap_or(field)
}

impl From<PaddleXError> for ExError {
    fn from(err: PaddleXError) -> Self {
        let message = err.to_string();
        match err {
            PaddleXError::Validation { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_field(field)
                .with_message(message),

            PaddleXError::InvalidPaddleId { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_paddle_id")
                .with_field("id")
                .with_message(message),

            PaddleXError::PaddleNotFound { paddle_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(paddle_id)
                .with_message("Paddle not found"),

            PaddleXError::AlreadyExists { paddle_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(paddle_id)
                    .with_message(message)
            }

            PaddleXError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            PaddleXError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_section() {
        let err = PaddleXError::validation("metadata.brand", "brand is required");
        assert_eq!(err.to_string(), "invalid metadata: brand is required");
    }

    #[test]
    fn test_section_of_plain_field() {
        assert_eq!(section_of("id"), "id");
        assert_eq!(section_of("performance.pop"), "performance");
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::AlreadyExists)
            .with_op("create_paddle")
            .with_entity_id("ENGAGE-PURSUIT-MX-6.0")
            .with_message("duplicate");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_ALREADY_EXISTS]"));
        assert!(rendered.contains("create_paddle"));
        assert!(rendered.contains("ENGAGE-PURSUIT-MX-6.0"));
    }
}
