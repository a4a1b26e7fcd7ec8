pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod resources;
pub mod transport;

pub use client::PushShift;
pub use error::{Error, Result};
