// ============================================================================
// Order Domain - The in-progress order for the current session
// ============================================================================
//
// - Value objects (LineItem, PricedLine)
// - Errors (OrderError)
// - Aggregate (Order with add/remove/clear/total)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
