// ============================================================================
// Catalog - Read-Only Restaurant & Menu Source
// ============================================================================
//
// This module contains the catalog data model (Restaurant, MenuItem) and the
// provider boundary the rest of the system fetches through. The catalog is a
// read-only snapshot per call; nothing downstream mutates it.
//
// ============================================================================

pub mod models;
pub mod provider;

// Re-export for convenience
pub use models::*;
pub use provider::*;
