use crate::domain::menu::Menu;
use crate::domain::order::{LineItem, Order};
use crate::store::SavedOrderRow;

pub const NOT_ON_MENU: &str = "Sorry, that dish is not on the menu.";
pub const ORDER_SAVED: &str = "Order saved successfully.";
pub const NO_ORDERS_FOUND: &str = "No orders found.";

pub const HELP: &str = "\
Commands:
  add <dish> [quantity]   add a dish to the order (quantity defaults to 1)
                          a last word containing a digit is read as the
                          quantity, so `add Route 66` adds \"Route\" x66
  remove <dish>           remove the first line item for a dish
  clear                   empty the order
  save                    save the current order
  view                    show all saved orders
  menu                    show the menu
  help                    show this list
  exit                    leave";

pub fn line_item_label(item: &LineItem) -> String {
    format!("{} x{}", item.dish, item.quantity)
}

pub fn total_label(total: f64) -> String {
    format!("Total: ${total:.2}")
}

/// Current line items, one per line, followed by the total.
pub fn order_summary(order: &Order) -> String {
    let mut lines: Vec<String> = order.items().iter().map(line_item_label).collect();
    lines.push(total_label(order.total()));
    lines.join("\n")
}

pub fn saved_orders_report(rows: &[SavedOrderRow]) -> String {
    if rows.is_empty() {
        return NO_ORDERS_FOUND.to_string();
    }

    rows.iter()
        .map(|row| {
            format!(
                "Dish: {}, Quantity: {}, Total: ${:.2}",
                row.dish, row.quantity, row.total
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn menu_listing(menu: &Menu) -> String {
    if menu.is_empty() {
        return "The menu is empty.".to_string();
    }

    menu.dishes()
        .map(|(name, price)| format!("{name}: ${price:.2}"))
        .collect::<Vec<_>>()
        .join("\n")
}
