// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with value objects, commands or
// events, errors, and the aggregate implementation.
//
// This layer has no knowledge of persistence or the presentation layer.
//
// ============================================================================

pub mod cart;
pub mod order;
