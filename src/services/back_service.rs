// ============================================================================
// Back Service - the capability a FrontService delegates to
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackServiceError {
    #[error("Back service action failed: {0}")]
    ActionFailed(String),
}

/// A single no-argument action performed on behalf of a front service.
///
/// Implementations choose their own error type; callers get it back
/// untouched.
pub trait BackService {
    type Error;

    fn perform_action(&self) -> Result<(), Self::Error>;
}

/// The back service the binary ships with. Its action only logs.
#[derive(Debug, Default, Clone)]
pub struct LoggingBackService;

impl LoggingBackService {
    pub fn new() -> Self {
        Self
    }
}

impl BackService for LoggingBackService {
    type Error = BackServiceError;

    fn perform_action(&self) -> Result<(), Self::Error> {
        tracing::info!("BackService: performing action");
        Ok(())
    }
}
