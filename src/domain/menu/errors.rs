// ============================================================================
// Menu Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("Dish not found on the menu: {0}")]
    NotFound(String),

    #[error("Invalid price for {dish}: {price}")]
    InvalidPrice { dish: String, price: f64 },

    #[error("Dish listed more than once: {0}")]
    DuplicateDish(String),
}
