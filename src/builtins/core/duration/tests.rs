use alloc::string::ToString;

use crate::{options::Unit, Instant, PlainDateTime, Sign};

use super::Duration;

#[test]
fn default_duration_string() {
    assert_eq!(Duration::default().to_string(), "PT0S");
    assert_eq!(Duration::ZERO, Duration::default());
}

#[test]
fn duration_strings() {
    assert_eq!(Duration::from_minutes(6).to_string(), "PT6M");
    assert_eq!(Duration::from_minutes(-6).to_string(), "PT-6M");
    assert_eq!(Duration::from_days(6).to_string(), "PT144H");
    assert_eq!(Duration::from_nanoseconds(10_500_000_000).to_string(), "PT10.5S");
    assert_eq!(Duration::from_nanoseconds(-500_000_000).to_string(), "PT-0.5S");
    assert_eq!(Duration::from_seconds(3_661).to_string(), "PT1H1M1S");
}

#[test]
fn conversions_truncate_toward_zero() {
    let duration = Duration::from_seconds(-359);
    assert_eq!(duration.to_minutes(), -5);
    assert_eq!(duration.to_hours(), 0);
    assert_eq!(duration.to_seconds(), -359);
    assert_eq!(duration.to_milliseconds(), -359_000);

    let duration = Duration::from_hours(47);
    assert_eq!(duration.to_days(), 1);
}

#[test]
fn conversions_saturate() {
    let duration = Duration::from_days(200_000_000);
    assert_eq!(duration.to_nanoseconds(), i64::MAX);
    assert_eq!(duration.negated().to_nanoseconds(), i64::MIN);
    assert_eq!(duration.to_days(), 200_000_000);
}

#[test]
fn of_fixed_units() {
    assert_eq!(
        Duration::of(2, Unit::Week).unwrap(),
        Duration::from_days(14)
    );
    assert_eq!(
        Duration::of(90, Unit::Millisecond).unwrap().as_nanoseconds(),
        90_000_000
    );
    assert!(Duration::of(1, Unit::Month).is_err());
    assert!(Duration::of(1, Unit::Year).is_err());
}

#[test]
fn total_decimal_weeks() {
    let total = Duration::from_days(137).total(Unit::Week).unwrap();
    assert!((total - 19.571).abs() < 0.001);

    let total = Duration::from_hours(-36).total(Unit::Day).unwrap();
    assert_eq!(total, -1.5);
    assert!(Duration::from_days(1).total(Unit::Month).is_err());
}

#[test]
fn sign_and_arithmetic() {
    let positive = Duration::from_seconds(10);
    let negative = positive.negated();
    assert_eq!(positive.sign(), Sign::Positive);
    assert_eq!(negative.sign(), Sign::Negative);
    assert_eq!(Duration::ZERO.sign(), Sign::Zero);
    assert!(negative.is_negative());
    assert_eq!(negative.abs(), positive);
    assert!(positive.checked_add(&negative).unwrap().is_zero());
    assert_eq!(
        positive.checked_sub(&negative).unwrap(),
        Duration::from_seconds(20)
    );
    let max = Duration::from_nanoseconds(i128::MAX);
    assert!(max.checked_add(&positive).is_none());
}

#[test]
fn between_timeline_values() {
    let start = Instant::from_epoch_seconds(1_000).unwrap();
    let end = Instant::from_epoch_seconds(1_010).unwrap();
    assert_eq!(Duration::between(&start, &end).to_seconds(), 10);
    assert_eq!(Duration::between(&end, &start).to_seconds(), -10);

    let start = PlainDateTime::try_new(2024, 1, 17, 15, 50, 30).unwrap();
    let end = PlainDateTime::try_new(2024, 6, 3, 10, 20, 55).unwrap();
    let duration = Duration::between(&start, &end);
    assert_eq!(duration.to_days(), 137);
    assert_eq!(duration.to_hours(), 137 * 24 + 18);
}
