use chrono::{DateTime, Utc};
use crate::domain::{OrderRef, Payment, User, UserRef};
use crate::order_actor::OrderRecord;

/// Represents a customer order together with its payments and owner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: DateTime<Utc>,
    pub payments: Vec<Payment>,
    pub user: Option<User>,
    pub has_weightables: bool,
}

impl Order {
    /// Creates a new, not yet persisted order owned by `user`.
    pub fn new(user: User, product_id: i64, quantity: i64, price: f64, order_date: DateTime<Utc>) -> Self {
        Self {
            product_id,
            quantity,
            price,
            order_date,
            user: Some(user),
            ..Self::default()
        }
    }

    /// Id of the owning user, if the order has one.
    pub fn owner_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Flattens the order for storage, replacing relations with ids.
    ///
    /// Returns `None` when the order has no owner.
    pub fn to_record(&self) -> Option<OrderRecord> {
        let user = self.user.as_ref()?;
        Some(OrderRecord {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
            order_date: self.order_date,
            payments: self.payments.iter().map(|payment| payment.id).collect(),
            user_id: user.id,
            has_weightables: self.has_weightables,
        })
    }

    /// Rebuilds an order from its stored shape.
    ///
    /// The owner is the stored owner id only, and payments are references
    /// holding just their ids until the order is enriched.
    pub fn from_record(record: OrderRecord) -> Self {
        let owner = UserRef { id: record.user_id };
        let order = OrderRef { id: record.id };
        let payments = record
            .payments
            .iter()
            .map(|&id| Payment { id, user: Some(owner), order: Some(order), ..Payment::default() })
            .collect();
        Self {
            id: record.id,
            product_id: record.product_id,
            quantity: record.quantity,
            price: record.price,
            order_date: record.order_date,
            payments,
            user: Some(User::with_id(record.user_id)),
            has_weightables: record.has_weightables,
        }
    }
}
