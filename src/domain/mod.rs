// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each part of the restaurant domain has its own subdirectory:
// - menu: the fixed dish -> price catalog for the session
// - order: the editable list of line items priced against a menu
//
// Nothing in here knows about storage or the console.
//
// ============================================================================

pub mod menu;
pub mod order;
