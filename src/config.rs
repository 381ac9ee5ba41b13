use crate::domain::menu::{Menu, MenuError, HOUSE_MENU};

// ============================================================================
// Application Configuration
// ============================================================================

/// Local single-file store in the working directory, created on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://orders.db";

/// Used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,restaurant_orders=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub default_log_filter: String,
    pub menu: Vec<(String, f64)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            default_log_filter: DEFAULT_LOG_FILTER.to_string(),
            menu: HOUSE_MENU
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
        }
    }
}

impl AppConfig {
    pub fn build_menu(&self) -> Result<Menu, MenuError> {
        Menu::new(self.menu.iter().cloned())
    }
}
