//! The assembled store pair: one repository per record kind over a shared
//! local cache and remote store.

use std::sync::Arc;

#[cfg(feature = "sqlite")]
use crate::cache::SqliteBackend;
use crate::cache::{CacheBackend, LocalCache};
use crate::config::Config;
use crate::entity::{DailyMileage, FuelExpense, Motorcycle, OilChange, Order, Sparepart};
use crate::error::{CacheError, Result};
use crate::remote::{RemoteStore, RemoteTransport};
use crate::repo::Repository;

pub struct Fleetbook<B> {
    orders: Repository<Order, B>,
    fuel_expenses: Repository<FuelExpense, B>,
    oil_changes: Repository<OilChange, B>,
    daily_mileages: Repository<DailyMileage, B>,
    spareparts: Repository<Sparepart, B>,
    motorcycles: Repository<Motorcycle, B>,
}

impl<B: CacheBackend> Fleetbook<B> {
    pub fn new(backend: B, remote: RemoteStore) -> Self {
        let cache = Arc::new(LocalCache::new(backend));
        Self {
            orders: Repository::new(Arc::clone(&cache), remote.clone()),
            fuel_expenses: Repository::new(Arc::clone(&cache), remote.clone()),
            oil_changes: Repository::new(Arc::clone(&cache), remote.clone()),
            daily_mileages: Repository::new(Arc::clone(&cache), remote.clone()),
            spareparts: Repository::new(Arc::clone(&cache), remote.clone()),
            motorcycles: Repository::new(cache, remote),
        }
    }

    pub fn orders(&self) -> &Repository<Order, B> {
        &self.orders
    }

    pub fn fuel_expenses(&self) -> &Repository<FuelExpense, B> {
        &self.fuel_expenses
    }

    pub fn oil_changes(&self) -> &Repository<OilChange, B> {
        &self.oil_changes
    }

    pub fn daily_mileages(&self) -> &Repository<DailyMileage, B> {
        &self.daily_mileages
    }

    pub fn spareparts(&self) -> &Repository<Sparepart, B> {
        &self.spareparts
    }

    pub fn motorcycles(&self) -> &Repository<Motorcycle, B> {
        &self.motorcycles
    }

    /// Wipe every collection on both sides, sequentially. Stops at the
    /// first cache failure; remote wipes are best-effort like any
    /// [`Repository::reset_all`]. Backs the app's full data reset.
    pub async fn reset_everything(&self) -> Result<(), CacheError> {
        self.orders.reset_all().await?;
        self.fuel_expenses.reset_all().await?;
        self.oil_changes.reset_all().await?;
        self.daily_mileages.reset_all().await?;
        self.spareparts.reset_all().await?;
        self.motorcycles.reset_all().await?;
        Ok(())
    }
}

#[cfg(feature = "sqlite")]
impl Fleetbook<SqliteBackend> {
    /// Open the on-device store described by `config`.
    ///
    /// The remote transport is supplied by the caller, who owns whatever
    /// backend client library it wraps; pass `None` to run local-only, the
    /// right choice whenever [`Config::remote`] carries no credentials.
    pub fn open(config: &Config, transport: Option<Arc<dyn RemoteTransport>>) -> Result<Self> {
        let backend = SqliteBackend::open(&config.cache.path)?;
        let remote = match transport {
            Some(t) => RemoteStore::new(t),
            None => RemoteStore::unconfigured(),
        };
        Ok(Self::new(backend, remote))
    }
}
