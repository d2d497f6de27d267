use serde::{Deserialize, Serialize};
use crate::domain::UserRef;
use crate::payment_actor::PaymentRecord;

/// Supported ways of paying for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    PayPal,
    BankTransfer,
}

/// Lightweight back-reference to an order, carried by payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderRef {
    pub id: i64,
}

/// A payment attached to an order. `amount` is not required to be positive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
    pub user: Option<UserRef>,
    pub order: Option<OrderRef>,
}

impl Payment {
    pub fn new(amount: f64, method: PaymentMethod) -> Self {
        Self { amount, method, ..Self::default() }
    }

    /// Flattens the payment for storage.
    ///
    /// Returns `None` unless both the user and the order reference are set.
    pub fn to_record(&self) -> Option<PaymentRecord> {
        let (user, order) = (self.user?, self.order?);
        Some(PaymentRecord {
            id: self.id,
            amount: self.amount,
            method: self.method,
            user_id: user.id,
            order_id: order.id,
        })
    }

    pub fn from_record(record: PaymentRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            method: record.method,
            user: Some(UserRef { id: record.user_id }),
            order: Some(OrderRef { id: record.order_id }),
        }
    }
}
