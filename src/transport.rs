//! Wire shapes for the (external) HTTP layer and their mapping from and to
//! the domain types.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::domain::{Order, Payment, PaymentMethod, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
}

/// Public view of a user. The password never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<PaymentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub has_weightables: bool,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id,
            amount: payment.amount,
            method: payment.method,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            orders: user.orders.clone(),
            payments: user.payments.clone(),
        }
    }
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            product_id: order.product_id,
            quantity: order.quantity,
            price: order.price,
            order_date: order.order_date,
            payments: order.payments.iter().map(PaymentResponse::from).collect(),
            user: order.user.as_ref().map(UserResponse::from),
            has_weightables: order.has_weightables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentRequest {
    pub payment_amount: f64,
    pub payment_method: PaymentMethod,
}

impl PaymentRequest {
    pub fn into_payment(self, user: &User) -> Payment {
        Payment {
            amount: self.payment_amount,
            method: self.payment_method,
            user: Some(user.reference()),
            ..Payment::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCreateRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: DateTime<Utc>,
    pub payments: Vec<PaymentRequest>,
    #[serde(default)]
    pub has_weightables: bool,
}

impl OrderCreateRequest {
    /// Builds a new (id 0) order owned by the authenticated `user`.
    pub fn into_order(self, user: &User) -> Order {
        Order {
            payments: self.payments.into_iter().map(|p| p.into_payment(user)).collect(),
            has_weightables: self.has_weightables,
            ..Order::new(user.clone(), self.product_id, self.quantity, self.price, self.order_date)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserCreateRequest {
    pub email: String,
    pub password: String,
}

impl UserCreateRequest {
    /// `None` when email or password is missing.
    pub fn into_user(self) -> Option<User> {
        if self.email.is_empty() || self.password.is_empty() {
            return None;
        }
        let username = username_from_email(&self.email);
        Some(User::new(username, self.email, self.password))
    }
}

/// The local part of the email, or a random `User<n>` when there is none.
fn username_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => local.to_string(),
        _ => format!("User{}", rand::thread_rng().gen_range(100..1099)),
    }
}
