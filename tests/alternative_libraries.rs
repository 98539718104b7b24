//! Cross-checks day and week counts against `chrono`.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use datespan::{options::Unit, Instant, PlainDate, PlainDateTime};

fn to_plain_date(date: NaiveDate) -> PlainDate {
    PlainDate::try_new(date.year(), date.month() as u8, date.day() as u8).unwrap()
}

fn to_plain_date_time(date_time: NaiveDateTime) -> PlainDateTime {
    PlainDateTime::try_new(
        date_time.year(),
        date_time.month() as u8,
        date_time.day() as u8,
        date_time.hour() as u8,
        date_time.minute() as u8,
        date_time.second() as u8,
    )
    .unwrap()
}

const DATE_PAIRS: [((i32, u32, u32), (i32, u32, u32)); 6] = [
    ((2017, 6, 24), (2017, 6, 30)),
    ((2024, 1, 10), (2024, 11, 15)),
    ((2020, 9, 11), (2020, 7, 13)),
    ((2000, 2, 29), (2100, 2, 28)),
    ((1969, 12, 31), (1970, 1, 1)),
    ((-44, 3, 15), (2024, 3, 15)),
];

#[test]
fn day_and_week_counts_match() {
    for ((y1, m1, d1), (y2, m2, d2)) in DATE_PAIRS {
        let start = NaiveDate::from_ymd_opt(y1, m1, d1).unwrap();
        let end = NaiveDate::from_ymd_opt(y2, m2, d2).unwrap();
        let expected = end.signed_duration_since(start);

        let (plain_start, plain_end) = (to_plain_date(start), to_plain_date(end));
        assert_eq!(
            Unit::Day.between(&plain_start, &plain_end).unwrap(),
            expected.num_days(),
            "{start} to {end}"
        );
        assert_eq!(
            Unit::Week.between(&plain_start, &plain_end).unwrap(),
            expected.num_weeks(),
            "{start} to {end}"
        );
        assert_eq!(
            u32::from(plain_end.day_of_week()),
            end.weekday().number_from_monday()
        );
    }
}

#[test]
fn elapsed_days_between_date_times_match() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 17)
        .unwrap()
        .and_hms_opt(15, 50, 30)
        .unwrap();
    let ends = [
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(10, 20, 55)
            .unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 18)
            .unwrap()
            .and_hms_opt(15, 50, 29)
            .unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap(),
    ];

    for end in ends {
        let expected = end.signed_duration_since(start);
        let (plain_start, plain_end) = (to_plain_date_time(start), to_plain_date_time(end));
        assert_eq!(
            Unit::Day.between(&plain_start, &plain_end).unwrap(),
            expected.num_days(),
            "{start} to {end}"
        );
        assert_eq!(
            Unit::Minute.between(&plain_start, &plain_end).unwrap(),
            expected.num_minutes(),
            "{start} to {end}"
        );
    }
}

#[test]
fn six_days_back_from_the_same_instant() {
    let epoch_milliseconds = 1_705_506_630_250;

    let chrono_today = DateTime::from_timestamp_millis(epoch_milliseconds)
        .unwrap()
        .date_naive();
    let chrono_earlier = chrono_today.checked_sub_days(Days::new(6)).unwrap();

    let instant = Instant::from_epoch_milliseconds(epoch_milliseconds).unwrap();
    assert_eq!(instant.to_string(), "2024-01-17T15:50:30.25Z");

    let today: PlainDate = instant.to_string()[..10].parse().unwrap();
    let earlier = today.subtract_days(6).unwrap();
    assert_eq!(earlier, to_plain_date(chrono_earlier));
    assert_eq!(
        earlier.until(&today, Unit::Day).unwrap(),
        chrono_today.signed_duration_since(chrono_earlier).num_days()
    );
}

#[test]
fn month_end_clamping_matches() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    for months in 1..=14 {
        let expected = start.checked_add_months(chrono::Months::new(months)).unwrap();
        let actual = to_plain_date(start).add_months(i64::from(months)).unwrap();
        assert_eq!(actual, to_plain_date(expected), "{months} months");
    }
}
