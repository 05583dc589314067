//! Sorting and manual pagination of a fully retrieved result set.
use thiserror::Error;

use crate::Ad;

/// Zero-based pagination of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("offset is out of index in the query results")]
pub struct OutOfRange {
    pub offset: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Returns `items[offset..min(offset + limit, len)]`.
    ///
    /// An `offset` equal to the number of items results in an empty page,
    /// only an `offset` greater than it is an [`OutOfRange`] error.
    pub fn apply<T>(&self, mut items: Vec<T>) -> Result<Vec<T>, OutOfRange> {
        let total = items.len();

        if self.offset > total {
            return Err(OutOfRange {
                offset: self.offset,
                total,
            });
        }

        let end = self.offset.saturating_add(self.limit).min(total);
        items.truncate(end);

        Ok(items.split_off(self.offset))
    }
}

/// Sorts the [`Ad`]s by `end_at`, the soonest expiring first.
///
/// The sort is stable, Ads with the same `end_at` keep their retrieval order.
pub fn sort_by_expiry(ads: &mut [Ad]) {
    ads.sort_by_key(|ad| ad.end_at);
}
