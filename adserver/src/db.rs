//! Persistence of [`Ad`]s.
//!
//! The application only depends on the [`AdStore`] trait,
//! a long-lived store is created once at startup and shared between requests.
use std::fmt;

use async_trait::async_trait;
use primitives::{Ad, Predicate};
use thiserror::Error;

pub use self::{memory::MemoryAdStore, mongo::MongoAdStore};

pub mod memory;
pub mod mongo;

/// The identifier assigned by the store to an inserted [`Ad`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdId(pub String);

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connecting to the store: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("MongoDB: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Store call did not finish in {0} ms")]
    Timeout(u128),
    #[error("Memory store lock is poisoned")]
    Poisoned,
}

#[async_trait]
pub trait AdStore: Send + Sync {
    async fn insert_ad(&self, ad: &Ad) -> Result<AdId, StoreError>;

    /// Returns every stored [`Ad`] matching the [`Predicate`], in retrieval order.
    ///
    /// No sorting or pagination is applied by the store.
    async fn find_ads(&self, predicate: &Predicate) -> Result<Vec<Ad>, StoreError>;
}
