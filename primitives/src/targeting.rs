//! Targeting of [`Ad`]s.
//!
//! A query carries optional [`Targeting`] values which the [`build_filter`]
//! turns into a store-agnostic [`Predicate`].
//!
//! [`Ad`]: crate::Ad
use serde::{Deserialize, Serialize};

pub use filter::{build_filter, Predicate};

mod filter;

/// The optional targeting values of a single query.
///
/// `None` means the dimension is not part of the query and it doesn't restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targeting {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub platform: Option<String>,
}

impl Targeting {
    /// Creates a [`Targeting`] treating the zero values (`0` age and empty strings) as absent.
    pub fn from_raw(age: u32, gender: &str, country: &str, platform: &str) -> Self {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

        Self {
            age: (age != 0).then_some(age),
            gender: non_empty(gender),
            country: non_empty(country),
            platform: non_empty(platform),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
