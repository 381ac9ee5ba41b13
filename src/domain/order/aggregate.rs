use std::sync::Arc;

use crate::domain::menu::Menu;
use super::value_objects::{LineItem, PricedLine};
use super::errors::OrderError;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================
//
// Rules:
// 1. A dish must be on the bound menu when it is added
// 2. Line items keep insertion order, which is also display order
// 3. Adding a dish that is already present appends a second line item
// 4. The order is always editable; there is no status
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct Order {
    menu: Arc<Menu>,
    items: Vec<LineItem>,
}

impl Order {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            menu,
            items: Vec::new(),
        }
    }

    /// Append a line item for `dish`.
    ///
    /// The quantity is taken as given, including zero or negative values.
    /// Fails with [`OrderError::InvalidDish`] when the dish is not on the
    /// menu, in which case the order is left untouched.
    pub fn add(&mut self, dish: &str, quantity: i32) -> Result<(), OrderError> {
        if !self.menu.contains(dish) {
            tracing::debug!(dish = %dish, quantity, "Rejected dish not on the menu");
            return Err(OrderError::InvalidDish(dish.to_string()));
        }

        self.items.push(LineItem::new(dish, quantity));

        tracing::debug!(
            dish = %dish,
            quantity,
            line_items = self.items.len(),
            "Added line item"
        );

        Ok(())
    }

    /// Remove the first line item for `dish`. Absent dishes are a no-op.
    pub fn remove(&mut self, dish: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.dish == dish)?;
        let removed = self.items.remove(index);

        tracing::debug!(
            dish = %dish,
            quantity = removed.quantity,
            line_items = self.items.len(),
            "Removed line item"
        );

        Some(removed)
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + self.line_total(item))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("Cleared order");
    }

    /// Snapshot of every line item with its total at the current prices.
    pub fn priced_lines(&self) -> Vec<PricedLine> {
        self.items
            .iter()
            .map(|item| PricedLine {
                dish: item.dish.clone(),
                quantity: item.quantity,
                total: self.line_total(item),
            })
            .collect()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    // Every item was checked against the menu on insert and the menu never
    // changes, so the lookup cannot miss.
    fn line_total(&self, item: &LineItem) -> f64 {
        self.menu
            .price_of(&item.dish)
            .map_or(0.0, |price| price * f64::from(item.quantity))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
