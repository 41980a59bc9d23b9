//! HTTP request handlers for the beer service.
//!
//! One module per operation:
//!
//! - [`fetch`] - Fetch a beer by ID
//! - [`create`] - Create a new beer
//! - [`update`] - Update a beer by ID
//! - [`health`] - Health check endpoints

pub mod create;
pub mod fetch;
pub mod health;
pub mod update;

// Re-export handlers for convenience
pub use create::create_beer_handler;
pub use fetch::fetch_beer_handler;
pub use health::health_handler;
pub use update::update_beer_handler;
