use chrono::{DateTime, Utc};

use crate::{Ad, Dimension};

use super::Targeting;

#[cfg(test)]
#[path = "filter_test.rs"]
mod test;

/// A predicate over stored [`Ad`]s.
///
/// Every leaf that inspects the conditions of an [`Ad`] is satisfied when
/// *any* of the [`Ad::conditions`] satisfies it.
///
/// Stores can either evaluate it with [`Predicate::matches`] or translate it
/// into their own query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Logical AND, an empty list matches everything.
    All(Vec<Predicate>),
    /// Logical OR, an empty list matches nothing.
    Any(Vec<Predicate>),
    /// `end_at > at`
    ActiveAt(DateTime<Utc>),
    /// `age_start <= age <= age_end`
    AgeWithin(u32),
    /// `age_start == 0 && age_end == 0`
    AgeUnrestricted,
    /// The value is a member of the [`Dimension`] set.
    Includes(Dimension, String),
    /// The [`Dimension`] set is empty.
    Unrestricted(Dimension),
}

impl Predicate {
    pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::All(predicates.into_iter().collect())
    }

    pub fn or(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::Any(predicates.into_iter().collect())
    }

    /// The age matches a condition's range or the condition has no age restriction.
    pub fn age(age: u32) -> Self {
        Self::or([Self::AgeWithin(age), Self::AgeUnrestricted])
    }

    /// The value is accepted by a condition or the condition leaves the dimension open.
    pub fn dimension(dimension: Dimension, value: impl Into<String>) -> Self {
        Self::or([
            Self::Includes(dimension, value.into()),
            Self::Unrestricted(dimension),
        ])
    }

    pub fn matches(&self, ad: &Ad) -> bool {
        match self {
            Predicate::All(predicates) => predicates.iter().all(|predicate| predicate.matches(ad)),
            Predicate::Any(predicates) => predicates.iter().any(|predicate| predicate.matches(ad)),
            Predicate::ActiveAt(at) => ad.end_at > *at,
            Predicate::AgeWithin(age) => ad.conditions.iter().any(|c| c.age_within(*age)),
            Predicate::AgeUnrestricted => ad.conditions.iter().any(|c| c.is_age_unrestricted()),
            Predicate::Includes(dimension, value) => ad
                .conditions
                .iter()
                .any(|c| c.values(*dimension).contains(value)),
            Predicate::Unrestricted(dimension) => ad
                .conditions
                .iter()
                .any(|c| c.values(*dimension).is_empty()),
        }
    }
}

/// Builds the [`Predicate`] for a query at the given time `now`.
///
/// Only active Ads are ever matched. Each dimension present in the [`Targeting`]
/// adds its own OR clause and the clauses are AND'ed together,
/// absent dimensions add nothing.
pub fn build_filter(targeting: &Targeting, now: DateTime<Utc>) -> Predicate {
    let age = targeting.age.map(Predicate::age);

    let dimensions = [
        (Dimension::Gender, &targeting.gender),
        (Dimension::Country, &targeting.country),
        (Dimension::Platform, &targeting.platform),
    ]
    .into_iter()
    .filter_map(|(dimension, value)| {
        value
            .as_ref()
            .map(|value| Predicate::dimension(dimension, value.as_str()))
    });

    Predicate::and(
        std::iter::once(Predicate::ActiveAt(now))
            .chain(age)
            .chain(dimensions),
    )
}
