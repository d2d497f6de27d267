//! Payment store: payment records keyed by a store-assigned id.

mod record;
pub mod entity;

pub use record::*;
