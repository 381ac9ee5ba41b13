// ============================================================================
// Order Store - SQLite persistence for saved orders
// ============================================================================

mod models;
mod order_store;

pub use models::SavedOrderRow;
pub use order_store::OrderStore;
