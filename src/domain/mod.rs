// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the order value object and its validation rules.
// It knows nothing about the front/back service wiring.
//
// ============================================================================

pub mod order;
