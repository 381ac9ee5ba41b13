use serde::{Deserialize, Serialize};

// ============================================================================
// Persisted Rows
// ============================================================================

/// One row of the `orders` table: a denormalized snapshot of a line item.
///
/// The total is stored as computed at save time, so the row stays valid
/// regardless of later menu prices.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct SavedOrderRow {
    pub id: i64,
    pub dish: String,
    pub quantity: i32,
    pub total: f64,
}
