use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// One (dish, quantity) entry of an order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineItem {
    pub dish: String,
    pub quantity: i32,
}

impl LineItem {
    pub fn new(dish: impl Into<String>, quantity: i32) -> Self {
        Self {
            dish: dish.into(),
            quantity,
        }
    }
}

/// A line item flattened together with its computed total, ready to persist.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PricedLine {
    pub dish: String,
    pub quantity: i32,
    pub total: f64,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_creation() {
        let item = LineItem::new("Pizza", 3);

        assert_eq!(item.dish, "Pizza");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_line_item_keeps_non_positive_quantity() {
        assert_eq!(LineItem::new("Pizza", 0).quantity, 0);
        assert_eq!(LineItem::new("Pizza", -2).quantity, -2);
    }

    #[test]
    fn test_priced_line_json_shape() {
        let line = PricedLine {
            dish: "Spaghetti".to_string(),
            quantity: 2,
            total: 21.98,
        };

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["dish"], "Spaghetti");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["total"], 21.98);
    }
}
