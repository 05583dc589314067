//! Request and response types of the REST API.
use thiserror::Error;

pub use ad_list::{AdListItem, AdListQuery, AdListResponse};
pub use create_ad::{CreateAd, CreateAdResponse};

pub mod ad_list;
pub mod create_ad;

/// Malformed input from the caller.
///
/// The request is rejected before any store call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is nil")]
    MissingTitle,
    #[error("start time is nil")]
    MissingStartAt,
    #[error("end time is nil")]
    MissingEndAt,
    #[error("offset should be in this interval: [{}, {}]", ad_list::MIN_PAGE_PARAM, ad_list::MAX_PAGE_PARAM)]
    OffsetOutOfBounds,
    #[error("limit should be in this interval: [{}, {}]", ad_list::MIN_PAGE_PARAM, ad_list::MAX_PAGE_PARAM)]
    LimitOutOfBounds,
    /// The body or the query string could not be parsed.
    #[error("{0}")]
    Malformed(String),
}
