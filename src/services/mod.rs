//! Business services layered over the store clients. `OrdersService` is the
//! orchestrator; the others are its collaborators.

pub mod authorization;
pub mod payments;
pub mod sessions;
pub mod users;
pub mod orders;

pub use authorization::*;
pub use payments::*;
pub use sessions::*;
pub use users::*;
pub use orders::*;
