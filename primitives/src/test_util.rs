//! Fixtures for testing with [`Ad`]s.
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use slog::{o, Discard, Logger};

use crate::{Ad, Condition};

/// A [`Condition`] targeting young iOS and Android users in Taiwan and Japan.
pub static DUMMY_CONDITION: Lazy<Condition> = Lazy::new(|| Condition {
    age_start: 20,
    age_end: 30,
    gender: vec!["F".into()],
    country: vec!["TW".into(), "JP".into()],
    platform: vec!["ios".into(), "android".into()],
});

/// An active [`Ad`] with the [`DUMMY_CONDITION`], expiring in 1 day.
pub static DUMMY_AD: Lazy<Ad> = Lazy::new(|| {
    ad_expiring_in("Dummy Ad", Duration::days(1)).with_conditions(vec![DUMMY_CONDITION.clone()])
});

/// Logger that discards every record
pub fn discard_logger() -> Logger {
    Logger::root(Discard, o!())
}

/// Creates an unrestricted [`Ad`] which started a day ago and expires after `expires_in` from now.
///
/// A negative `expires_in` creates an already expired [`Ad`].
pub fn ad_expiring_in(title: &str, expires_in: Duration) -> Ad {
    let now = Utc::now();

    ad_ending_at(title, now - Duration::days(1), now + expires_in)
}

pub fn ad_ending_at(title: &str, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Ad {
    Ad {
        title: title.to_string(),
        start_at,
        end_at,
        conditions: vec![Condition::unrestricted()],
    }
}

/// Builder helpers for the fixtures
pub trait AdExt {
    fn with_conditions(self, conditions: Vec<Condition>) -> Self;
}

impl AdExt for Ad {
    fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }
}
