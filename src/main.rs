mod domain;
mod clients;
mod error;
mod storage;
mod services;
mod transport;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod order_actor;
mod payment_actor;
mod user_actor;

use chrono::Utc;
use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, OrderSystem, SystemConfig};
use crate::domain::PaymentMethod;
use crate::transport::{OrderCreateRequest, OrderResponse, PaymentRequest, UserCreateRequest, UserResponse};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SystemConfig::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting application with complete order system");

    // Create the entire order system (starts all stores)
    let system = OrderSystem::new(&config);

    let request = UserCreateRequest {
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
    };
    let user = request.into_user().ok_or("email and password are required")?;

    let span = tracing::info_span!("sign_up");
    let signed_up = async {
        info!("Signing up demo user");
        system.users.sign_up(user).await
    }
    .instrument(span)
    .await?;

    info!(user_id = signed_up.user.id, "User signed up successfully");
    println!("{}", serde_json::to_string_pretty(&UserResponse::from(&signed_up.user))?);

    // Every later call acts as whoever the token belongs to
    let current_user = system.users.authenticate(&signed_up.token).await?;

    let request = OrderCreateRequest {
        product_id: 42,
        quantity: 5,
        price: 50.0,
        order_date: Utc::now(),
        payments: vec![
            PaymentRequest { payment_amount: 200.0, payment_method: PaymentMethod::CreditCard },
            PaymentRequest { payment_amount: 50.0, payment_method: PaymentMethod::BankTransfer },
        ],
        has_weightables: false,
    };
    let mut order = request.into_order(&current_user);

    let span = tracing::info_span!("order_processing");
    let stored = async {
        info!("Storing order");
        system.orders.store_order(current_user.id, &mut order).await
    }
    .instrument(span)
    .await;

    let order_id = match stored {
        Ok(stored) => {
            info!(order_id = stored.id, "Order stored successfully");
            stored.id
        }
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Order processing failed");
            system.shutdown().await?;
            return Err(e.into());
        }
    };

    let fetched = system.orders.get_order(current_user.id, Some(&current_user), order_id).await?;
    println!("{}", serde_json::to_string_pretty(&OrderResponse::from(&fetched))?);

    let cheap = system
        .orders
        .get_orders_with_filter(current_user.id, Some(&current_user), |order| order.price <= 100.0)
        .await?;
    info!(count = cheap.len(), "Orders priced at most 100.0");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
