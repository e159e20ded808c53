// ============================================================================
// Order Business Rule Errors
// ============================================================================

/// Coarse classification of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid {field}: '{value}' must match the pattern '{pattern}'")]
    InvalidArgument {
        field: &'static str,
        value: String,
        pattern: &'static str,
    },
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}
