//! Fetch the hiring item list, drop unnamed items, and group the rest by
//! list id.

pub mod config;
pub mod fetch;
pub mod item;
pub mod model;
pub mod palette;
pub mod render;
pub mod state;

pub type Result<T> = anyhow::Result<T>;

pub use config::Config;
pub use fetch::{FetchClient, FetchError};
pub use item::Record;
pub use model::{GroupedResult, process};
pub use palette::{Color, color_for_group};
pub use state::{FetchState, ItemsLoader};
