use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::errors::MenuError;

// ============================================================================
// Menu - Fixed dish -> unit price mapping
// ============================================================================

/// Dishes served when no other menu is supplied.
pub const HOUSE_MENU: [(&str, f64); 3] = [
    ("Spaghetti", 10.99),
    ("Pizza", 12.99),
    ("Burger", 8.99),
];

/// Immutable for the lifetime of a session. Dish names are case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    dishes: BTreeMap<String, f64>,
}

impl Menu {
    /// Build a menu from (name, price) pairs.
    ///
    /// Prices must be finite and non-negative, and every name must be unique.
    pub fn new<I, S>(dishes: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut catalog = BTreeMap::new();

        for (name, price) in dishes {
            let name = name.into();

            if !price.is_finite() || price < 0.0 {
                return Err(MenuError::InvalidPrice { dish: name, price });
            }

            match catalog.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(MenuError::DuplicateDish(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(price);
                }
            }
        }

        Ok(Self { dishes: catalog })
    }

    pub fn price_of(&self, dish: &str) -> Result<f64, MenuError> {
        self.dishes
            .get(dish)
            .copied()
            .ok_or_else(|| MenuError::NotFound(dish.to_string()))
    }

    pub fn contains(&self, dish: &str) -> bool {
        self.dishes.contains_key(dish)
    }

    /// Dishes in name order
    pub fn dishes(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.dishes.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            dishes: HOUSE_MENU
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_dish_menu() -> Menu {
        Menu::new([("Spaghetti", 10.99), ("Pizza", 12.99)]).unwrap()
    }

    #[test]
    fn test_price_of_known_dish() {
        let menu = two_dish_menu();
        assert_eq!(menu.price_of("Pizza").unwrap(), 12.99);
        assert_eq!(menu.price_of("Spaghetti").unwrap(), 10.99);
    }

    #[test]
    fn test_price_of_unknown_dish_is_not_found() {
        let menu = two_dish_menu();
        let result = menu.price_of("Burger");
        assert_eq!(result, Err(MenuError::NotFound("Burger".to_string())));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let menu = two_dish_menu();
        assert!(menu.contains("Pizza"));
        assert!(!menu.contains("pizza"));
        assert!(!menu.contains(""));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Menu::new([("Soup", -1.0)]);
        assert!(matches!(result, Err(MenuError::InvalidPrice { ref dish, .. }) if dish == "Soup"));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(Menu::new([("Soup", f64::NAN)]).is_err());
        assert!(Menu::new([("Soup", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_free_dish_allowed() {
        let menu = Menu::new([("Water", 0.0)]).unwrap();
        assert_eq!(menu.price_of("Water").unwrap(), 0.0);
    }

    #[test]
    fn test_duplicate_dish_rejected() {
        let result = Menu::new([("Pizza", 12.99), ("Pizza", 9.99)]);
        assert_eq!(result, Err(MenuError::DuplicateDish("Pizza".to_string())));
    }

    #[test]
    fn test_dishes_listed_in_name_order() {
        let menu = Menu::default();
        let names: Vec<&str> = menu.dishes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Burger", "Pizza", "Spaghetti"]);
        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
    }

    #[test]
    fn test_default_menu_matches_house_menu() {
        let menu = Menu::default();
        for (name, price) in HOUSE_MENU {
            assert_eq!(menu.price_of(name).unwrap(), price);
        }
        assert_eq!(menu, Menu::new(HOUSE_MENU).unwrap());
    }
}
