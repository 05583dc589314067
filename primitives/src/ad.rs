use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An advertisement campaign with an active window and targeting conditions.
///
/// The [`Ad`] is active while `end_at` is in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    /// Unique by convention, this is not enforced by the store.
    pub title: String,
    #[serde(alias = "startat")]
    pub start_at: DateTime<Utc>,
    #[serde(alias = "endat")]
    pub end_at: DateTime<Utc>,
    /// Conditions are OR'ed, an Ad is shown if any of them matches.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// One targeting rule of an [`Ad`].
///
/// Every dimension has an unrestricted sentinel:
/// - age: `age_start == 0 && age_end == 0`
/// - gender, country & platform: an empty set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default, alias = "agestart")]
    pub age_start: u32,
    #[serde(default, alias = "ageend")]
    pub age_end: u32,
    #[serde(default)]
    pub gender: Vec<String>,
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub platform: Vec<String>,
}

impl Condition {
    /// The all-open condition, it matches every query.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_age_unrestricted(&self) -> bool {
        self.age_start == 0 && self.age_end == 0
    }

    /// Inclusive on both ends of the range.
    pub fn age_within(&self, age: u32) -> bool {
        self.age_start <= age && age <= self.age_end
    }

    /// The accepted values of the given set-valued [`Dimension`].
    pub fn values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Gender => &self.gender,
            Dimension::Country => &self.country,
            Dimension::Platform => &self.platform,
        }
    }
}

/// The set-valued targeting dimensions of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Gender,
    Country,
    Platform,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Gender, Dimension::Country, Dimension::Platform];
}

impl Dimension {
    /// The field name of the dimension in a [`Condition`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Gender => "gender",
            Dimension::Country => "country",
            Dimension::Platform => "platform",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
