pub mod client;
pub mod error;
pub mod events;
pub mod models;

pub use client::*;
pub use error::*;
pub use models::*;
