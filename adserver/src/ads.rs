//! Operations on [`Ad`]s executed against an [`AdStore`].
//!
//! Every store call is bounded by a timeout, nothing is retried.
use std::{future::Future, time::Duration};

use chrono::{DateTime, Utc};
use primitives::{
    pagination::{sort_by_expiry, OutOfRange},
    targeting::build_filter,
    Ad, Pagination, Targeting,
};
use slog::{debug, info, Logger};
use thiserror::Error;

use crate::db::{AdId, AdStore, StoreError};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

async fn with_timeout<T, F>(timeout: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_elapsed| StoreError::Timeout(timeout.as_millis()))?
}

/// Stores a single [`Ad`], it's either fully stored or not at all.
///
/// On [`StoreError::Timeout`] the write may still have reached the store,
/// the caller only knows it was not acknowledged in time.
pub async fn insert_ad<S: AdStore + ?Sized>(
    store: &S,
    ad: &Ad,
    timeout: Duration,
    logger: &Logger,
) -> Result<AdId, StoreError> {
    let id = with_timeout(timeout, store.insert_ad(ad)).await?;

    info!(logger, "Inserted Ad"; "id" => %id, "title" => &ad.title);

    Ok(id)
}

/// Finds the active [`Ad`]s matching the [`Targeting`] at `now`.
///
/// All matching Ads are retrieved, sorted by the soonest `end_at`
/// and only then the [`Pagination`] is applied.
pub async fn query_ads<S: AdStore + ?Sized>(
    store: &S,
    targeting: &Targeting,
    pagination: Pagination,
    now: DateTime<Utc>,
    timeout: Duration,
    logger: &Logger,
) -> Result<Vec<Ad>, QueryError> {
    let filter = build_filter(targeting, now);
    debug!(logger, "Querying Ads"; "filter" => ?&filter);

    let mut ads = with_timeout(timeout, store.find_ads(&filter)).await?;
    let total = ads.len();

    sort_by_expiry(&mut ads);
    let page = pagination.apply(ads)?;

    debug!(logger, "Ads found"; "total" => total, "page" => page.len());

    Ok(page)
}
