use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::{Ad, Pagination, Targeting};

pub const MIN_PAGE_PARAM: i64 = 1;
pub const MAX_PAGE_PARAM: i64 = 100;
/// Used for both `offset` and `limit` when they are not passed.
pub const DEFAULT_PAGE_PARAM: i64 = 5;

/// `GET /api/v1/ad` query parameters.
///
/// The `offset` is 1-based, it's turned into a zero-based [`Pagination`] by [`AdListQuery::validate()`].
/// Zero values (`age=0`, empty strings) of the targeting mean the dimension is not queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdListQuery {
    #[serde(default = "default_page_param")]
    pub offset: i64,
    #[serde(default = "default_page_param")]
    pub limit: i64,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub platform: String,
}

fn default_page_param() -> i64 {
    DEFAULT_PAGE_PARAM
}

impl Default for AdListQuery {
    fn default() -> Self {
        Self {
            offset: DEFAULT_PAGE_PARAM,
            limit: DEFAULT_PAGE_PARAM,
            age: 0,
            gender: String::new(),
            country: String::new(),
            platform: String::new(),
        }
    }
}

impl AdListQuery {
    pub fn validate(&self) -> Result<(Pagination, Targeting), ValidationError> {
        let bounds = MIN_PAGE_PARAM..=MAX_PAGE_PARAM;

        if !bounds.contains(&self.offset) {
            return Err(ValidationError::OffsetOutOfBounds);
        }
        if !bounds.contains(&self.limit) {
            return Err(ValidationError::LimitOutOfBounds);
        }

        // both are in `[1, 100]`
        let pagination = Pagination::new((self.offset - 1) as usize, self.limit as usize);
        let targeting = Targeting::from_raw(self.age, &self.gender, &self.country, &self.platform);

        Ok((pagination, targeting))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdListResponse {
    pub items: Vec<AdListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListItem {
    pub title: String,
    pub end_at: DateTime<Utc>,
}

impl From<&Ad> for AdListItem {
    fn from(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            end_at: ad.end_at,
        }
    }
}

impl FromIterator<Ad> for AdListResponse {
    fn from_iter<I: IntoIterator<Item = Ad>>(ads: I) -> Self {
        Self {
            items: ads.into_iter().map(|ad| AdListItem::from(&ad)).collect(),
        }
    }
}
