use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::{ResourceClient, StoreError};
use crate::order_actor::OrderRecord;
use crate::storage::OrderStorage;

/// Client for the order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<OrderRecord>,
}

impl_basic_client!(OrderClient, OrderRecord);

#[async_trait]
impl OrderStorage for OrderClient {
    async fn get_order(&self, order_id: i64) -> Result<OrderRecord, StoreError> {
        self.find(order_id).await
    }

    #[instrument(skip(self))]
    async fn all_orders_for_user(&self, user_id: i64) -> Result<Vec<OrderRecord>, StoreError> {
        debug!("Sending request");
        self.inner.list(move |order| order.user_id == user_id).await
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, order_id: i64) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.delete(order_id).await
    }

    #[instrument(skip(self, order), fields(order_id = order.id))]
    async fn update_order(&self, order: OrderRecord) -> Result<OrderRecord, StoreError> {
        debug!("Sending request");
        self.inner.update(order).await
    }

    #[instrument(skip(self, order), fields(order_id = order.id))]
    async fn insert_order(&self, order: OrderRecord) -> Result<OrderRecord, StoreError> {
        debug!("Sending request");
        self.inner.insert(order).await
    }
}
