//! Order store: flattened order records keyed by a caller-assigned id.

mod record;
pub mod entity;

pub use record::*;
