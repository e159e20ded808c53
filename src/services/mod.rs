// ============================================================================
// Services - front/back delegation
// ============================================================================
//
// FrontService owns a shared handle to some BackService and forwards to it.
// The domain layer does not depend on anything here.
//
// ============================================================================

pub mod back_service;
pub mod front_service;

pub use back_service::{BackService, BackServiceError, LoggingBackService};
pub use front_service::{FrontService, TRACE_MESSAGE};
