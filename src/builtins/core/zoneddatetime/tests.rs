use alloc::string::ToString;

use crate::{
    options::{Disambiguation, Unit},
    provider::TimeZoneProvider,
    DateTimeError, DateTimeResult, PlainDateTime, TimeZone, UtcOffset,
};

use super::ZonedDateTime;

/// A single zone, `Test/Eastern`, on -05:00 with -04:00 daylight time from
/// 2024-03-10T07:00Z until 2024-11-03T06:00Z.
struct TestProvider;

const DST_START: i64 = 1_710_054_000;
const DST_END: i64 = 1_730_613_600;

impl TimeZoneProvider for TestProvider {
    fn check_identifier(&self, identifier: &str) -> bool {
        identifier == "Test/Eastern"
    }

    fn get_named_tz_offset_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> DateTimeResult<i64> {
        if !self.check_identifier(identifier) {
            return Err(DateTimeError::range().with_message("unknown zone"));
        }
        if (DST_START..DST_END).contains(&epoch_seconds) {
            Ok(-4 * 3600)
        } else {
            Ok(-5 * 3600)
        }
    }
}

fn eastern() -> TimeZone {
    TimeZone::try_from_str_with_provider("Test/Eastern", &TestProvider).unwrap()
}

fn local(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    disambiguation: Disambiguation,
) -> DateTimeResult<ZonedDateTime> {
    let date_time = PlainDateTime::try_new(year, month, day, hour, minute, 0)?;
    ZonedDateTime::from_plain_date_time_with_provider(
        &date_time,
        eastern(),
        disambiguation,
        &TestProvider,
    )
}

#[test]
fn unknown_zone_is_rejected() {
    assert!(TimeZone::try_from_str_with_provider("Test/Nowhere", &TestProvider).is_err());
}

#[test]
fn gap_resolution() {
    let compatible = local(2024, 3, 10, 2, 30, Disambiguation::Compatible).unwrap();
    assert_eq!(compatible.hour(), 3);
    assert_eq!(compatible.minute(), 30);
    assert_eq!(compatible.offset().seconds(), -4 * 3600);

    let later = local(2024, 3, 10, 2, 30, Disambiguation::Later).unwrap();
    assert_eq!(later, compatible);

    let earlier = local(2024, 3, 10, 2, 30, Disambiguation::Earlier).unwrap();
    assert_eq!(earlier.hour(), 1);
    assert_eq!(earlier.offset().seconds(), -5 * 3600);

    assert!(local(2024, 3, 10, 2, 30, Disambiguation::Reject).is_err());
}

#[test]
fn overlap_resolution() {
    let compatible = local(2024, 11, 3, 1, 30, Disambiguation::Compatible).unwrap();
    assert_eq!(compatible.offset().seconds(), -4 * 3600);
    assert_eq!(compatible.epoch_milliseconds(), (DST_END - 1800) * 1000);

    let earlier = local(2024, 11, 3, 1, 30, Disambiguation::Earlier).unwrap();
    assert_eq!(earlier, compatible);

    let later = local(2024, 11, 3, 1, 30, Disambiguation::Later).unwrap();
    assert_eq!(later.offset().seconds(), -5 * 3600);
    assert_eq!(later.epoch_milliseconds(), (DST_END + 1800) * 1000);
    assert_eq!(later.hour(), 1);

    assert!(local(2024, 11, 3, 1, 30, Disambiguation::Reject).is_err());
}

#[test]
fn days_keep_wall_clock_across_transition() {
    let start = local(2024, 3, 9, 12, 0, Disambiguation::Reject).unwrap();
    let end = start.add_days_with_provider(1, &TestProvider).unwrap();
    assert_eq!((end.day(), end.hour()), (10, 12));
    assert_eq!(end.offset().seconds(), -4 * 3600);

    assert_eq!(
        start.until_with_provider(&end, Unit::Day, &TestProvider).unwrap(),
        1
    );
    assert_eq!(
        start.until_with_provider(&end, Unit::Hour, &TestProvider).unwrap(),
        23
    );
    assert_eq!(
        end.subtract_days_with_provider(1, &TestProvider).unwrap(),
        start
    );
}

#[test]
fn hours_follow_the_timeline() {
    let start = local(2024, 3, 10, 1, 30, Disambiguation::Reject).unwrap();
    let end = start.add_hours_with_provider(1, &TestProvider).unwrap();
    assert_eq!((end.hour(), end.minute()), (3, 30));
    assert_eq!(
        end.subtract_minutes_with_provider(60, &TestProvider).unwrap(),
        start
    );
    assert_eq!(
        start.until_with_provider(&end, Unit::Second, &TestProvider).unwrap(),
        3600
    );
}

#[test]
fn date_units_use_the_receiver_zone() {
    // 2024-01-11T04:00Z
    let start = local(2024, 1, 10, 23, 0, Disambiguation::Reject).unwrap();
    let end = ZonedDateTime::from_str_with_provider("2024-01-12T01:00:00Z[UTC]", &TestProvider)
        .unwrap();

    // In Test/Eastern the end is 2024-01-11T20:00, short of a full day.
    assert_eq!(
        start.until_with_provider(&end, Unit::Day, &TestProvider).unwrap(),
        0
    );
    assert_eq!(
        start.until_with_provider(&end, Unit::Hour, &TestProvider).unwrap(),
        21
    );
    // Seen from UTC the start is 2024-01-11T04:00.
    assert_eq!(
        end.since_with_provider(&start, Unit::Day, &TestProvider).unwrap(),
        0
    );
}

#[test]
fn parse_and_display() {
    let source = "2024-01-10T09:00:00-05:00[Test/Eastern]";
    let zoned = ZonedDateTime::from_str_with_provider(source, &TestProvider).unwrap();
    assert_eq!(zoned.to_string(), source);
    assert_eq!(zoned.time_zone(), &eastern());

    let utc = ZonedDateTime::from_str_with_provider("2024-01-10T09:00:00Z", &TestProvider).unwrap();
    assert_eq!(utc.to_string(), "2024-01-10T09:00:00+00:00[UTC]");
    assert!(utc.time_zone().is_utc());

    let fixed =
        ZonedDateTime::from_str_with_provider("2024-01-10T09:00:00+05:30", &TestProvider).unwrap();
    assert_eq!(
        fixed.time_zone(),
        &TimeZone::from(UtcOffset::from_hours_minutes(5, 30).unwrap())
    );
    assert_eq!(fixed.to_string(), "2024-01-10T09:00:00+05:30[+05:30]");

    // Without an offset the local time is resolved in the zone.
    let resolved =
        ZonedDateTime::from_str_with_provider("2024-03-10T02:30:00[Test/Eastern]", &TestProvider)
            .unwrap();
    assert_eq!(resolved.hour(), 3);

    assert!(ZonedDateTime::from_str_with_provider("2024-01-10T09:00:00", &TestProvider).is_err());
}

#[test]
fn parse_basic_format() {
    let zoned =
        ZonedDateTime::from_str_with_provider("20220201T000000Z[UTC]", &TestProvider).unwrap();
    assert_eq!(zoned.to_string(), "2022-02-01T00:00:00+00:00[UTC]");
    assert!(zoned.time_zone().is_utc());

    let zoned =
        ZonedDateTime::from_str_with_provider("20240110T0900-0500[Test/Eastern]", &TestProvider)
            .unwrap();
    assert_eq!(zoned.to_string(), "2024-01-10T09:00:00-05:00[Test/Eastern]");
}

#[test]
fn conversions() {
    let zoned = local(2024, 6, 3, 10, 20, Disambiguation::Reject).unwrap();
    let date_time = zoned.to_plain_date_time();
    assert_eq!(date_time.to_string(), "2024-06-03T10:20:00");
    assert_eq!(zoned.to_plain_date().to_string(), "2024-06-03");

    let utc = zoned
        .with_time_zone_with_provider(TimeZone::utc(), &TestProvider)
        .unwrap();
    assert_eq!(utc.instant(), zoned.instant());
    assert_eq!(utc.hour(), 14);

    let same = ZonedDateTime::try_new_with_provider(
        zoned.epoch_nanoseconds().as_i128(),
        eastern(),
        &TestProvider,
    )
    .unwrap();
    assert_eq!(same, zoned);
}
