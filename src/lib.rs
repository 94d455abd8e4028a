//! Dual-store persistence for a small transport operator's books.
//!
//! Every record kind (orders, fuel, oil changes, daily mileage, spare
//! parts, motorcycles) is written to a durable on-device cache and, best
//! effort, to a remote backend. Reads merge both sides with the remote
//! winning per id. The cache is the store that must never lie; the remote
//! is the one that may be absent, slow, or briefly stale.

pub mod error;

pub mod cache;
pub mod config;
pub mod db;
pub mod entity;
pub mod identity;
pub mod remote;
pub mod repo;

pub use config::Config;
pub use db::Fleetbook;
pub use entity::{DailyMileage, FuelExpense, Motorcycle, OilChange, Order, Sparepart};
pub use error::{CacheError, ConfigError, FleetbookError, RemoteError, Result};
pub use remote::{RemoteStore, RemoteTransport, TransportError, TransportErrorKind};
pub use repo::Repository;
