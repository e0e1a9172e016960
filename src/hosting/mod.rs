//! HTTP hosting for the game.
//!
//! - [`Server`] — actix-web bootstrap and route handlers
//! - [`Arena`] — shared state: resolver, aggregator, metrics
//! - [`Config`] — command line / environment configuration
mod arena;
mod config;
mod metrics;
mod request;
mod response;
mod server;

pub use arena::*;
pub use config::*;
pub use metrics::*;
pub use request::*;
pub use response::*;
pub use server::*;
