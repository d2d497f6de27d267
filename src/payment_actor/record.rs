use crate::domain::PaymentMethod;

/// Storage shape of a payment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentRecord {
    pub id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
    pub user_id: i64,
    pub order_id: i64,
}
