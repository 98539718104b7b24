//! Utility date and time equations

// ==== Begin Date Equations ====

pub(crate) const MS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MS_PER_MINUTE: i64 = 60_000;

/// Days from March 1st, 0000 to January 1st, 1970 in the civil calendar.
const EPOCH_SHIFT: i64 = 719_468;
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Returns whether the year is a leap year.
#[inline]
pub(crate) const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Mathematically determine the days in a year.
#[inline]
pub(crate) const fn mathematical_days_in_year(year: i32) -> u16 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

/// 12.2.31 `ISODaysInMonth ( year, month )`
#[inline]
pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        // Months are validated before reaching this point.
        _ => 0,
    }
}

/// Returns the day of the year the zero-indexed `month` starts on, zero-indexed.
#[inline]
pub(crate) const fn month_to_day(month: u8, is_leap: bool) -> u16 {
    let leap_day = is_leap as u16;
    match month {
        0 => 0,
        1 => 31,
        2 => 59 + leap_day,
        3 => 90 + leap_day,
        4 => 120 + leap_day,
        5 => 151 + leap_day,
        6 => 181 + leap_day,
        7 => 212 + leap_day,
        8 => 243 + leap_day,
        9 => 273 + leap_day,
        10 => 304 + leap_day,
        _ => 334 + leap_day,
    }
}

/// Calculates the epoch days for a Gregorian year, month, and day.
///
/// The month is 1-indexed. The calculation shifts the year to begin on
/// March 1st so the leap day falls at the end of the computational year.
pub(crate) const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let year = year as i64 - (month <= 2) as i64;
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 {
        month as i64 - 3
    } else {
        month as i64 + 9
    };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_A_400Y_CYCLE + day_of_era - EPOCH_SHIFT
}

/// Returns the Gregorian year, month, and day for an epoch day.
pub(crate) const fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let shifted = epoch_days + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_of_era = shifted - era * DAYS_IN_A_400Y_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + (month <= 2) as i64;
    (year as i32, month as u8, day as u8)
}

/// Returns the epoch days of January 1st of `year`.
#[inline]
pub(crate) const fn epoch_days_for_year(year: i32) -> i64 {
    epoch_days_from_gregorian_date(year, 1, 1)
}

/// Returns the ISO day of the week, 1 (Monday) to 7 (Sunday).
#[inline]
pub(crate) const fn epoch_days_to_iso_day_of_week(epoch_days: i64) -> u8 {
    // January 1st, 1970 was a Thursday.
    ((epoch_days + 3).rem_euclid(7) + 1) as u8
}

/// Returns the POSIX day of the week, 0 (Sunday) to 6 (Saturday).
#[inline]
pub(crate) const fn epoch_days_to_posix_day_of_week(epoch_days: i64) -> u8 {
    (epoch_days + 4).rem_euclid(7) as u8
}

// ==== End Date Equations ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days_round_trip_known_dates() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_gregorian_date(2017, 6, 24), 17_341);
        assert_eq!(ymd_from_epoch_days(17_341), (2017, 6, 24));
        assert_eq!(ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(ymd_from_epoch_days(11_016), (2000, 2, 29));
    }

    #[test]
    fn extreme_years() {
        let min = epoch_days_from_gregorian_date(-271_821, 4, 20);
        assert_eq!(min, -100_000_000);
        assert_eq!(ymd_from_epoch_days(min), (-271_821, 4, 20));

        let max = epoch_days_from_gregorian_date(275_760, 9, 13);
        assert_eq!(max, 100_000_000);
        assert_eq!(ymd_from_epoch_days(max), (275_760, 9, 13));
    }

    #[test]
    fn days_in_month_and_year() {
        assert_eq!(iso_days_in_month(2020, 2), 29);
        assert_eq!(iso_days_in_month(2100, 2), 28);
        assert_eq!(iso_days_in_month(2000, 2), 29);
        assert_eq!(iso_days_in_month(2021, 9), 30);
        assert_eq!(mathematical_days_in_year(2024), 366);
        assert_eq!(mathematical_days_in_year(2023), 365);
        assert_eq!(month_to_day(2, true), 60);
        assert_eq!(month_to_day(11, false), 334);
    }

    #[test]
    fn day_of_week() {
        // 2024-01-10 was a Wednesday.
        let days = epoch_days_from_gregorian_date(2024, 1, 10);
        assert_eq!(epoch_days_to_iso_day_of_week(days), 3);
        assert_eq!(epoch_days_to_posix_day_of_week(days), 3);
        // 2024-01-14 was a Sunday.
        let days = epoch_days_from_gregorian_date(2024, 1, 14);
        assert_eq!(epoch_days_to_iso_day_of_week(days), 7);
        assert_eq!(epoch_days_to_posix_day_of_week(days), 0);
    }
}
