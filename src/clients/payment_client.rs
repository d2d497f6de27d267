use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::{ResourceClient, StoreError};
use crate::payment_actor::PaymentRecord;
use crate::storage::PaymentStorage;

/// Client for the payment store actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentRecord>,
}

impl_basic_client!(PaymentClient, PaymentRecord);

#[async_trait]
impl PaymentStorage for PaymentClient {
    #[instrument(skip(self, payment), fields(order_id = payment.order_id))]
    async fn create(&self, payment: PaymentRecord) -> Result<PaymentRecord, StoreError> {
        debug!("Sending request");
        self.inner.create(payment).await
    }

    async fn read(&self, payment_id: i64) -> Result<PaymentRecord, StoreError> {
        self.find(payment_id).await
    }

    #[instrument(skip(self, payment), fields(payment_id = payment.id))]
    async fn update(&self, payment: PaymentRecord) -> Result<PaymentRecord, StoreError> {
        debug!("Sending request");
        self.inner.update(payment).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, payment_id: i64) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.delete(payment_id).await
    }

    #[instrument(skip(self))]
    async fn all_by_order_id(&self, order_id: i64) -> Result<Vec<PaymentRecord>, StoreError> {
        debug!("Sending request");
        let payments = self.inner.list(move |payment| payment.order_id == order_id).await?;
        if payments.is_empty() {
            return Err(StoreError::NoMatches { kind: "payments", query: format!("order {}", order_id) });
        }
        Ok(payments)
    }
}
