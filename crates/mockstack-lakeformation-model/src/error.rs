//! Lake Formation error types.
//!
//! Lake Formation errors use JSON format with a `__type` field containing
//! the fully-qualified error type name.

use std::fmt;

/// Well-known Lake Formation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LakeFormationErrorCode {
    /// A resource, grant target, or tag key does not exist.
    EntityNotFoundException,
    /// A request parameter is malformed or inconsistent.
    #[default]
    InvalidInputException,
    /// The entity being created already exists.
    AlreadyExistsException,
    /// Internal service error.
    InternalServiceException,
}

impl LakeFormationErrorCode {
    /// Returns the fully-qualified error type string for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::EntityNotFoundException => {
                "com.amazonaws.lakeformation#EntityNotFoundException"
            }
            Self::InvalidInputException => "com.amazonaws.lakeformation#InvalidInputException",
            Self::AlreadyExistsException => "com.amazonaws.lakeformation#AlreadyExistsException",
            Self::InternalServiceException => {
                "com.amazonaws.lakeformation#InternalServiceException"
            }
        }
    }

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityNotFoundException => "EntityNotFoundException",
            Self::InvalidInputException => "InvalidInputException",
            Self::AlreadyExistsException => "AlreadyExistsException",
            Self::InternalServiceException => "InternalServiceException",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServiceException => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for LakeFormationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Lake Formation error response.
#[derive(Debug)]
pub struct LakeFormationError {
    /// The error code.
    pub code: LakeFormationErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for LakeFormationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LakeFormationError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for LakeFormationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl LakeFormationError {
    /// Create a new `LakeFormationError` from an error code.
    #[must_use]
    pub fn new(code: LakeFormationErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `LakeFormationError` with a custom message.
    #[must_use]
    pub fn with_message(code: LakeFormationErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// A resource, grant target, or tag key was not found.
    #[must_use]
    pub fn entity_not_found(message: impl Into<String>) -> Self {
        Self::with_message(LakeFormationErrorCode::EntityNotFoundException, message)
    }

    /// A request parameter is malformed or inconsistent.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::with_message(LakeFormationErrorCode::InvalidInputException, message)
    }

    /// The entity being created already exists.
    #[must_use]
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::with_message(LakeFormationErrorCode::AlreadyExistsException, message)
    }

    /// Internal service error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(LakeFormationErrorCode::InternalServiceException, message)
    }
}

/// Create a `LakeFormationError` from an error code.
///
/// # Examples
///
/// ```
/// use mockstack_lakeformation_model::error::LakeFormationErrorCode;
/// use mockstack_lakeformation_model::lakeformation_error;
///
/// let err = lakeformation_error!(EntityNotFoundException);
/// assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
///
/// let err = lakeformation_error!(InvalidInputException, "Table name missing");
/// assert_eq!(err.message, "Table name missing");
/// ```
#[macro_export]
macro_rules! lakeformation_error {
    ($code:ident) => {
        $crate::error::LakeFormationError::new($crate::error::LakeFormationErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::LakeFormationError::with_message(
            $crate::error::LakeFormationErrorCode::$code,
            $msg,
        )
    };
}
