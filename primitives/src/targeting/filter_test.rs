use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use super::*;
use crate::{
    test_util::{ad_expiring_in, AdExt, DUMMY_AD},
    Condition,
};

fn condition(age: (u32, u32), gender: &[&str], country: &[&str], platform: &[&str]) -> Condition {
    let to_vec = |values: &[&str]| -> Vec<String> { values.iter().map(ToString::to_string).collect() };

    Condition {
        age_start: age.0,
        age_end: age.1,
        gender: to_vec(gender),
        country: to_vec(country),
        platform: to_vec(platform),
    }
}

#[test]
fn empty_targeting_only_filters_active_ads() {
    let now = Utc::now();

    let filter = build_filter(&Targeting::default(), now);
    assert_eq!(Predicate::All(vec![Predicate::ActiveAt(now)]), filter);

    let active = ad_expiring_in("active", Duration::hours(1));
    let expired = ad_expiring_in("expired", Duration::hours(-1));

    assert!(filter.matches(&active));
    assert!(!filter.matches(&expired));
}

#[test]
fn ends_exactly_now_is_not_active() {
    let now = Utc::now();
    let mut ad = ad_expiring_in("ending", Duration::zero());
    ad.end_at = now;

    assert!(!build_filter(&Targeting::default(), now).matches(&ad));
}

#[test]
fn every_present_dimension_adds_an_and_clause() {
    let now = Utc::now();
    let targeting = Targeting::from_raw(24, "F", "TW", "ios");

    let expected = Predicate::All(vec![
        Predicate::ActiveAt(now),
        Predicate::Any(vec![Predicate::AgeWithin(24), Predicate::AgeUnrestricted]),
        Predicate::Any(vec![
            Predicate::Includes(Dimension::Gender, "F".into()),
            Predicate::Unrestricted(Dimension::Gender),
        ]),
        Predicate::Any(vec![
            Predicate::Includes(Dimension::Country, "TW".into()),
            Predicate::Unrestricted(Dimension::Country),
        ]),
        Predicate::Any(vec![
            Predicate::Includes(Dimension::Platform, "ios".into()),
            Predicate::Unrestricted(Dimension::Platform),
        ]),
    ]);

    assert_eq!(expected, build_filter(&targeting, now));
}

#[test]
fn absent_dimensions_are_passed_through() {
    let now = Utc::now();
    let targeting = Targeting {
        country: Some("JP".into()),
        ..Default::default()
    };

    let expected = Predicate::All(vec![
        Predicate::ActiveAt(now),
        Predicate::dimension(Dimension::Country, "JP"),
    ]);

    assert_eq!(expected, build_filter(&targeting, now));
}

#[test]
fn expired_ads_never_match_regardless_of_targeting() {
    let now = Utc::now();
    let expired =
        ad_expiring_in("expired", Duration::days(-1)).with_conditions(vec![Condition::unrestricted()]);

    for targeting in [
        Targeting::default(),
        Targeting::from_raw(30, "", "", ""),
        Targeting::from_raw(0, "M", "TW", "web"),
        Targeting::from_raw(99, "F", "JP", "ios"),
    ] {
        assert!(
            !build_filter(&targeting, now).matches(&expired),
            "Expired Ad matched {targeting:?}"
        );
    }
}

#[test]
fn unrestricted_age_matches_any_age() {
    let now = Utc::now();
    let ad = ad_expiring_in("any age", Duration::days(1))
        .with_conditions(vec![condition((0, 0), &["M"], &[], &[])]);

    for age in [1, 17, 18, 42, 100, u32::MAX] {
        let targeting = Targeting::from_raw(age, "", "", "");
        assert!(build_filter(&targeting, now).matches(&ad), "age {age}");
    }
}

#[test]
fn age_range_is_inclusive() {
    let now = Utc::now();
    let ad = ad_expiring_in("twenties", Duration::days(1))
        .with_conditions(vec![condition((20, 29), &[], &[], &[])]);

    let matches = |age| build_filter(&Targeting::from_raw(age, "", "", ""), now).matches(&ad);

    assert!(!matches(19));
    assert!(matches(20));
    assert!(matches(25));
    assert!(matches(29));
    assert!(!matches(30));
}

#[test]
fn empty_set_matches_any_value_of_the_dimension() {
    let now = Utc::now();
    let ad = ad_expiring_in("everyone", Duration::days(1))
        .with_conditions(vec![condition((18, 40), &[], &["TW"], &[])]);

    for gender in ["F", "M", "X"] {
        let targeting = Targeting::from_raw(0, gender, "", "");
        assert!(build_filter(&targeting, now).matches(&ad), "gender {gender}");
    }

    for platform in ["ios", "android", "web"] {
        let targeting = Targeting::from_raw(0, "", "", platform);
        assert!(build_filter(&targeting, now).matches(&ad), "platform {platform}");
    }

    assert!(build_filter(&Targeting::from_raw(0, "", "TW", ""), now).matches(&ad));
    assert!(!build_filter(&Targeting::from_raw(0, "", "JP", ""), now).matches(&ad));
}

#[test]
fn combined_dimensions_must_all_match() {
    let now = Utc::now();
    // DUMMY_AD: 20-30, F, TW/JP, ios/android
    let ad = DUMMY_AD.clone();

    assert!(build_filter(&Targeting::from_raw(25, "F", "TW", "ios"), now).matches(&ad));
    // matching age but wrong gender
    assert!(!build_filter(&Targeting::from_raw(25, "M", "", ""), now).matches(&ad));
    // matching gender but age out of range
    assert!(!build_filter(&Targeting::from_raw(40, "F", "", ""), now).matches(&ad));
    // everything matches but the platform
    assert!(!build_filter(&Targeting::from_raw(25, "F", "JP", "web"), now).matches(&ad));
}

#[test]
fn dimensions_can_be_satisfied_by_different_conditions() {
    let now = Utc::now();
    let ad = ad_expiring_in("two conditions", Duration::days(1)).with_conditions(vec![
        condition((20, 30), &["M"], &[], &[]),
        condition((50, 60), &["F"], &["JP"], &[]),
    ]);

    assert!(build_filter(&Targeting::from_raw(25, "F", "", ""), now).matches(&ad));
    assert!(build_filter(&Targeting::from_raw(55, "M", "", ""), now).matches(&ad));
    assert!(build_filter(&Targeting::from_raw(0, "", "TW", ""), now).matches(&ad));
    assert!(!build_filter(&Targeting::from_raw(40, "", "", ""), now).matches(&ad));
    assert!(!build_filter(&Targeting::from_raw(0, "X", "", ""), now).matches(&ad));
}

#[test]
fn ad_without_conditions_only_matches_an_empty_targeting() {
    let now = Utc::now();
    let ad = ad_expiring_in("no conditions", Duration::days(1)).with_conditions(vec![]);

    assert!(build_filter(&Targeting::default(), now).matches(&ad));
    assert!(!build_filter(&Targeting::from_raw(30, "", "", ""), now).matches(&ad));
    assert!(!build_filter(&Targeting::from_raw(0, "F", "", ""), now).matches(&ad));
}

#[test]
fn empty_combinators() {
    let ad = DUMMY_AD.clone();

    assert!(Predicate::All(vec![]).matches(&ad));
    assert!(!Predicate::Any(vec![]).matches(&ad));
}
