//! Statistics aggregation.
//!
//! The [`Aggregator`] owns a [`Store`] and is the only path through which
//! the running tally changes. Two stores are provided:
//!
//! - [`Memory`] — process-local, resets on every restart
//! - [`Postgres`] — durable, survives restarts (feature `database`)
mod aggregator;
mod memory;
mod snapshot;
mod store;

#[cfg(test)]
mod flaky;
#[cfg(feature = "database")]
mod postgres;
#[cfg(feature = "database")]
mod schema;

pub use aggregator::*;
pub use memory::*;
pub use snapshot::*;
pub use store::*;

#[cfg(test)]
pub use flaky::*;
#[cfg(feature = "database")]
pub use postgres::*;
#[cfg(feature = "database")]
pub use schema::*;
