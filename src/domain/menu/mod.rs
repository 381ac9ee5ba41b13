// ============================================================================
// Menu Domain - Dish catalog
// ============================================================================

pub mod catalog;
pub mod errors;

pub use catalog::*;
pub use errors::*;
