use std::sync::RwLock;

use async_trait::async_trait;
use primitives::{Ad, Predicate};

use super::{AdId, AdStore, StoreError};

/// In-process [`AdStore`] which keeps the Ads in insertion order.
///
/// Predicates are evaluated with [`Predicate::matches`].
#[derive(Debug, Default)]
pub struct MemoryAdStore {
    records: RwLock<Vec<Ad>>,
}

impl MemoryAdStore {
    pub fn new(initial_ads: &[Ad]) -> Self {
        Self {
            records: RwLock::new(initial_ads.to_vec()),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.records
            .read()
            .map(|ads| ads.len())
            .map_err(|_| StoreError::Poisoned)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|len| len == 0)
    }
}

#[async_trait]
impl AdStore for MemoryAdStore {
    async fn insert_ad(&self, ad: &Ad) -> Result<AdId, StoreError> {
        let mut writer = self.records.write().map_err(|_| StoreError::Poisoned)?;
        writer.push(ad.clone());

        // the position is the identifier, Ads are never removed
        Ok(AdId(writer.len().to_string()))
    }

    async fn find_ads(&self, predicate: &Predicate) -> Result<Vec<Ad>, StoreError> {
        let reader = self.records.read().map_err(|_| StoreError::Poisoned)?;

        Ok(reader
            .iter()
            .filter(|ad| predicate.matches(ad))
            .cloned()
            .collect())
    }
}
