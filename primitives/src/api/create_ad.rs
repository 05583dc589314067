use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::{Ad, Condition};

/// The message returned for every successfully stored [`Ad`].
pub const CREATED_MESSAGE: &str = "POST successfully";

/// `POST /api/v1/ad` request body.
///
/// All fields are optional on deserialization so that missing ones are
/// reported with a [`ValidationError`] instead of a generic parsing error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAd {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "startat")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "endat")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl CreateAd {
    /// Validates the request and creates the [`Ad`].
    ///
    /// When no conditions are passed a single [`Condition::unrestricted()`] is injected.
    pub fn into_ad(self) -> Result<Ad, ValidationError> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or(ValidationError::MissingTitle)?;

        let start_at = self.start_at.ok_or(ValidationError::MissingStartAt)?;
        let end_at = self.end_at.ok_or(ValidationError::MissingEndAt)?;

        let conditions = if self.conditions.is_empty() {
            vec![Condition::unrestricted()]
        } else {
            self.conditions
        };

        Ok(Ad {
            title,
            start_at,
            end_at,
            conditions,
        })
    }
}

/// `{ "<title>": "POST successfully" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateAdResponse(pub HashMap<String, String>);

impl CreateAdResponse {
    pub fn created(title: &str) -> Self {
        Self([(title.to_string(), CREATED_MESSAGE.to_string())].into_iter().collect())
    }
}
