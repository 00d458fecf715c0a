/// Supply inventory low-stock alerts.
///
/// Each tracked item carries a reorder threshold; the alert selects rows
/// strictly below it. An item exactly at its threshold is considered
/// adequately stocked. An empty result means fully stocked — the
/// presentation layer renders that as a positive message, not a blank
/// table.

use serde::{Deserialize, Serialize};

/// One tracked supply item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub current_stock: u32,
    pub threshold: u32,
}

/// The default inventory tracked by the dashboard.
pub fn default_inventory() -> Vec<StockItem> {
    [
        ("Bandages", 200, 50),
        ("Syringes", 150, 30),
        ("Gloves", 300, 100),
        ("Masks", 500, 150),
    ]
    .into_iter()
    .map(|(name, current_stock, threshold)| StockItem {
        name: name.to_string(),
        current_stock,
        threshold,
    })
    .collect()
}

/// Rows whose stock has fallen strictly below the reorder threshold,
/// preserving inventory order.
pub fn low_stock(items: &[StockItem]) -> Vec<StockItem> {
    items
        .iter()
        .filter(|item| item.current_stock < item.threshold)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
