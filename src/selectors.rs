//! Pure helpers over cached lists
//!
//! Screens filter and sort the container caches locally; these functions
//! are the shared implementations. All of them are pure: same input, same
//! output, no mutation of the cache.

use chrono::{DateTime, Utc};

use crate::inventory::InventoryItem;
use crate::orders::Order;

/// Case-insensitive search over name, sku and category
///
/// An empty or whitespace-only query returns every item in its original
/// order.
pub fn search_inventory<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle)
                || item
                    .category
                    .as_ref()
                    .map(|category| category.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

/// Items with no stock on hand
pub fn out_of_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| item.quantity <= 0.0).collect()
}

/// Items above zero but at or below the given threshold
pub fn low_stock(items: &[InventoryItem], threshold: f64) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| item.quantity > 0.0 && item.quantity <= threshold)
        .collect()
}

/// Orders whose status matches, case-insensitively
pub fn filter_orders_by_status<'a>(orders: &'a [Order], status: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| order.status.eq_ignore_ascii_case(status))
        .collect()
}

/// Orders sorted newest first; ties keep their cached order
pub fn sort_orders_newest_first(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    sorted
}

/// Format an amount for display, e.g. `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Format an order date for display, e.g. `05 Aug 2026`
pub fn format_order_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}
