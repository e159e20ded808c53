// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (Order, OrderId)
// - Errors (OrderError, ErrorKind)
// - Sequence helpers (fibonacci)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod sequence;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use sequence::*;
