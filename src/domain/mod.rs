//! Rich in-memory entities. Relations are held as objects here and flattened
//! to ids by the record types in the store actors.

pub mod user;
pub mod payment;
pub mod order;

pub use user::*;
pub use payment::*;
pub use order::*;
