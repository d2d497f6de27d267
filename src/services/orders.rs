use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::IdSequence;
use crate::domain::{Order, OrderRef, Payment, User, UserRef};
use crate::error::OrderError;
use crate::services::{Authorizer, PaymentsService};
use crate::storage::OrderStorage;

/// Sequences authorization, payment persistence and order storage.
///
/// Every operation stops at the first failure and hands it back unchanged.
/// Nothing is retried and nothing is rolled back: payments stored before a
/// later step fails stay stored.
#[derive(Clone)]
pub struct OrdersService {
    storage: Arc<dyn OrderStorage>,
    payments: PaymentsService,
    authorizer: Arc<dyn Authorizer>,
    order_ids: IdSequence,
}

impl OrdersService {
    pub fn new(
        storage: Arc<dyn OrderStorage>,
        payments: PaymentsService,
        authorizer: Arc<dyn Authorizer>,
        order_ids: IdSequence,
    ) -> Self {
        Self {
            storage,
            payments,
            authorizer,
            order_ids,
        }
    }

    /// Stores a new order (id 0) or updates an existing one, persisting its
    /// payments first.
    ///
    /// The caller's payments are updated in place with their stored ids and
    /// back-references, even when a later step fails.
    ///
    /// Only the requester and `order.user` are compared. The update path does
    /// not check who owns the stored record, so it is overwritten as given.
    #[instrument(skip(self, order), fields(order_id = order.id, payments = order.payments.len()))]
    pub async fn store_order(&self, user_id: i64, order: &mut Order) -> Result<Order, OrderError> {
        info!("Processing store_order request");

        let owner = match order.user.as_ref() {
            Some(user) if user_id != 0 && user.id == user_id => user.reference(),
            _ => {
                warn!("Order owner does not match requesting user");
                return Err(OrderError::UserRequired);
            }
        };

        let is_new = order.id == 0;
        let order_id = if is_new { self.order_ids.next_id() } else { order.id };

        // Step 1: Persist payments (caller's payments are mutated)
        let stored_payments = self.process_payments(order_id, owner, &mut order.payments).await?;

        // Step 2: Persist the order itself
        let mut record = order.to_record().ok_or(OrderError::UserRequired)?;
        record.id = order_id;
        let stored = if is_new {
            self.storage.insert_order(record).await
        } else {
            self.storage.update_order(record).await
        }
        .map_err(|e| {
            error!(error = %e, is_new, "Order could not be stored");
            e
        })?;

        info!(order_id = stored.id, "Order stored successfully");
        let mut stored_order = Order::from_record(stored);
        stored_order.payments = stored_payments;
        Ok(stored_order)
    }

    async fn process_payments(
        &self,
        order_id: i64,
        owner: UserRef,
        payments: &mut [Payment],
    ) -> Result<Vec<Payment>, OrderError> {
        let mut stored_payments = Vec::with_capacity(payments.len());
        for payment in payments.iter_mut() {
            payment.order = Some(OrderRef { id: order_id });
            payment.user = Some(owner);
            let stored = self.payments.store_payment(payment).await.map_err(|e| {
                error!(error = %e, "Payment could not be stored");
                e
            })?;
            payment.id = stored.id;
            stored_payments.push(stored);
        }
        Ok(stored_payments)
    }

    /// Loads one order and enriches it with its payments and the caller.
    #[instrument(skip(self, current_user))]
    pub async fn get_order(&self, user_id: i64, current_user: Option<&User>, order_id: i64) -> Result<Order, OrderError> {
        debug!("Processing get_order request");
        if user_id == 0 {
            return Err(OrderError::UserRequired);
        }
        let record = self.storage.get_order(order_id).await?;
        self.enrich(user_id, current_user, Order::from_record(record)).await
    }

    /// All orders owned by `user_id`, ascending by order id.
    #[instrument(skip(self, current_user))]
    pub async fn get_orders(&self, user_id: i64, current_user: Option<&User>) -> Result<Vec<Order>, OrderError> {
        self.get_orders_with_filter(user_id, current_user, |_| true).await
    }

    /// Like [`get_orders`](Self::get_orders), keeping only orders for which
    /// `filter` holds. The filter sees the stored order before enrichment, so
    /// rejected orders are never authorized nor have payments loaded.
    #[instrument(skip(self, current_user, filter))]
    pub async fn get_orders_with_filter<F>(
        &self,
        user_id: i64,
        current_user: Option<&User>,
        filter: F,
    ) -> Result<Vec<Order>, OrderError>
    where
        F: Fn(&Order) -> bool + Send,
    {
        debug!("Processing get_orders request");
        if user_id == 0 {
            return Err(OrderError::UserRequired);
        }
        let records = self.storage.all_orders_for_user(user_id).await?;

        let mut orders = Vec::new();
        for record in records {
            let order = Order::from_record(record);
            if !filter(&order) {
                continue;
            }
            orders.push(self.enrich(user_id, current_user, order).await?);
        }
        debug!(count = orders.len(), "Orders loaded");
        Ok(orders)
    }

    /// Authorize, then attach payments, then attach the caller.
    ///
    /// Storage decides who owns the order; the caller-supplied user decides
    /// who is asking. The returned order carries the latter.
    async fn enrich(&self, user_id: i64, current_user: Option<&User>, mut order: Order) -> Result<Order, OrderError> {
        if !self.authorizer.is_authorized(user_id, &order)? {
            warn!(order_id = order.id, "User is not authorized for order");
            return Err(OrderError::NotAuthorized);
        }

        order.payments = self.payments.get_payments_by_order(order.id).await?;

        let user = current_user.ok_or_else(|| {
            error!(order_id = order.id, "No authenticated user supplied");
            OrderError::UserRequired
        })?;
        order.user = Some(user.clone());
        Ok(order)
    }
}
