use std::sync::Arc;
use tracing::{error, info};
use crate::actor_framework::{IdSequence, ResourceActor};
use crate::app_system::SystemConfig;
use crate::clients::{OrderClient, PaymentClient, UserClient};
use crate::order_actor::OrderRecord;
use crate::payment_actor::PaymentRecord;
use crate::services::{OrdersService, OwnershipAuthorizer, PaymentsService, SessionService, UsersService};
use crate::user_actor::UserRecord;

/// The main application system that wires stores and services together.
///
/// Responsible for starting the store actors, injecting their clients into
/// the services, and handling shutdown.
pub struct OrderSystem {
    pub orders: OrdersService,
    pub users: UsersService,
    pub payments: PaymentsService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &SystemConfig) -> Self {
        info!(?config, "Starting order system");

        // 1. User store + sessions
        let user_ids = IdSequence::new();
        let (user_actor, user_inner) = ResourceActor::<UserRecord>::new(config.channel_buffer, move || user_ids.next_id());
        let user_handle = tokio::spawn(user_actor.with_capacity(config.user_capacity).run());
        let users = UsersService::new(Arc::new(UserClient::new(user_inner)), Arc::new(SessionService::new()));

        // 2. Payment store
        let payment_ids = IdSequence::new();
        let (payment_actor, payment_inner) = ResourceActor::<PaymentRecord>::new(config.channel_buffer, move || payment_ids.next_id());
        let payment_handle = tokio::spawn(payment_actor.run());
        let payments = PaymentsService::new(Arc::new(PaymentClient::new(payment_inner)));

        // 3. Order store. The orchestrator pre-assigns order ids, so the store
        // draws from the same sequence.
        let order_ids = IdSequence::new();
        let store_order_ids = order_ids.clone();
        let (order_actor, order_inner) = ResourceActor::<OrderRecord>::new(config.channel_buffer, move || store_order_ids.next_id());
        let order_handle = tokio::spawn(order_actor.run());
        let orders = OrdersService::new(
            Arc::new(OrderClient::new(order_inner)),
            payments.clone(),
            Arc::new(OwnershipAuthorizer),
            order_ids,
        );

        Self {
            orders,
            users,
            payments,
            handles: vec![user_handle, payment_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");
        // Store actors stop once every client (and so every sender) is gone.
        drop(self.orders);
        drop(self.users);
        drop(self.payments);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
