//! Wire model for the items endpoint.

pub mod record;

pub use record::{Record, Records};
