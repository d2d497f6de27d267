use std::sync::Arc;
use tracing::{debug, error, instrument};
use crate::actor_framework::StoreError;
use crate::domain::Payment;
use crate::error::PaymentError;
use crate::storage::PaymentStorage;

/// Creates, updates and looks up payments over the payment store.
#[derive(Clone)]
pub struct PaymentsService {
    storage: Arc<dyn PaymentStorage>,
}

impl PaymentsService {
    pub fn new(storage: Arc<dyn PaymentStorage>) -> Self {
        Self { storage }
    }

    /// Creates the payment when its id is 0, otherwise updates it.
    ///
    /// The returned payment carries the store's fields and the caller's
    /// user/order references.
    #[instrument(skip(self, payment), fields(payment_id = payment.id))]
    pub async fn store_payment(&self, payment: &Payment) -> Result<Payment, PaymentError> {
        let record = payment.to_record().ok_or_else(|| {
            error!("Payment is missing its user or order");
            PaymentError::IncompletePayment
        })?;

        let stored = if payment.id == 0 {
            self.storage.create(record).await?
        } else {
            self.storage.update(record).await?
        };
        debug!(stored_id = stored.id, "Payment stored");

        Ok(Payment {
            user: payment.user,
            order: payment.order,
            ..Payment::from_record(stored)
        })
    }

    /// All payments of an order. An order without payments yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_payments_by_order(&self, order_id: i64) -> Result<Vec<Payment>, PaymentError> {
        match self.storage.all_by_order_id(order_id).await {
            Ok(records) => Ok(records.into_iter().map(Payment::from_record).collect()),
            Err(StoreError::NoMatches { .. }) => {
                debug!("Order has no payments");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn get_payment_by_id(&self, id: i64) -> Result<Payment, PaymentError> {
        match self.storage.read(id).await {
            Ok(record) => Ok(Payment::from_record(record)),
            Err(StoreError::NotFound { .. }) => Err(PaymentError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}
