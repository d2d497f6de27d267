//! Storage ports consumed by the services.
//!
//! Each port is a narrow CRUD contract keyed by integer id. The production
//! implementations are the actor-backed clients in [`crate::clients`]; tests
//! swap in clients wired to mock channels.

use async_trait::async_trait;
use crate::actor_framework::StoreError;
use crate::order_actor::OrderRecord;
use crate::payment_actor::PaymentRecord;
use crate::user_actor::UserRecord;

#[async_trait]
pub trait OrderStorage: Send + Sync {
    /// Fails with `StoreError::NotFound` when no order has this id.
    async fn get_order(&self, order_id: i64) -> Result<OrderRecord, StoreError>;
    async fn all_orders_for_user(&self, user_id: i64) -> Result<Vec<OrderRecord>, StoreError>;
    async fn delete_order(&self, order_id: i64) -> Result<(), StoreError>;
    async fn update_order(&self, order: OrderRecord) -> Result<OrderRecord, StoreError>;
    /// Fails with `StoreError::AlreadyExists` when the id is taken.
    async fn insert_order(&self, order: OrderRecord) -> Result<OrderRecord, StoreError>;
}

#[async_trait]
pub trait PaymentStorage: Send + Sync {
    /// Stores a new payment; the id on the input is ignored.
    async fn create(&self, payment: PaymentRecord) -> Result<PaymentRecord, StoreError>;
    async fn read(&self, payment_id: i64) -> Result<PaymentRecord, StoreError>;
    async fn update(&self, payment: PaymentRecord) -> Result<PaymentRecord, StoreError>;
    async fn delete(&self, payment_id: i64) -> Result<(), StoreError>;
    /// Payments of one order, ascending by id. Zero matches is `StoreError::NoMatches`.
    async fn all_by_order_id(&self, order_id: i64) -> Result<Vec<PaymentRecord>, StoreError>;
}

#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Stores a new user; the id on the input is ignored.
    async fn create(&self, user: UserRecord) -> Result<UserRecord, StoreError>;
    async fn read(&self, user_id: i64) -> Result<UserRecord, StoreError>;
    async fn update(&self, user: UserRecord) -> Result<UserRecord, StoreError>;
    async fn delete(&self, user_id: i64) -> Result<(), StoreError>;
}
