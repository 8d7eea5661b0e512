pub mod client;
mod travel_plans;
pub mod types;

pub use client::*;
pub use types::*;
