//! User store: user records keyed by a store-assigned id, optionally bounded.

mod record;
pub mod entity;

pub use record::*;
