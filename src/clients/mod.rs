//! Typed handles to the store actors. Each one implements the matching
//! storage port from [`crate::storage`].

#[macro_use]
mod macros;

pub mod order_client;
pub mod payment_client;
pub mod user_client;

pub use order_client::*;
pub use payment_client::*;
pub use user_client::*;
