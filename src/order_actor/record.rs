use chrono::{DateTime, Utc};

/// Storage shape of an order: relations are flattened to ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderRecord {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: DateTime<Utc>,
    pub payments: Vec<i64>,
    pub user_id: i64,
    pub has_weightables: bool,
}
