// Relevant operations:
//
//  - Time Zone Identifiers
//  - GetNamedTimeZoneOffsetNanoseconds
//     - fn(id, epochNanoseconds) -> offset
//
// Wall-clock resolution (gaps and overlaps) lives on `TimeZone` and is built
// from repeated offset lookups, so this provider only has to answer one
// question: which offset is in effect at a given exact second.

// NOTES:
//
// TZif data only lists transitions up to some year. Anything past the last
// transition is computed from the POSIX tz string in the footer, e.g.
// `EST5EDT,M3.2.0,M11.1.0` for America/Montreal.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::cell::RefCell;

use combine::Parser;

use tzif::{
    self,
    data::{
        posix::{PosixTzString, TransitionDate, TransitionDay},
        time::Seconds,
        tzif::{DataBlock, LocalTimeTypeRecord, TzifData, TzifHeader},
    },
};

use crate::{
    provider::TimeZoneProvider, utils, DateTimeError, DateTimeResult, DateTimeUnwrap,
    SECONDS_PER_DAY,
};

/// `LocalTimeRecord` represents an local time offset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeRecord {
    /// Whether the local time record is a Daylight Savings Time.
    pub is_dst: bool,
    /// The time zone offset in seconds.
    pub offset: i64,
}

impl From<LocalTimeTypeRecord> for LocalTimeRecord {
    fn from(value: LocalTimeTypeRecord) -> Self {
        Self {
            is_dst: value.is_dst,
            offset: value.utoff.0,
        }
    }
}

/// `TZif` stands for Time zone information format is laid out by [RFC 8536][rfc8536] and
/// laid out by the [tzdata manual][tzif-manual]
///
/// This representation wraps the parsed type from the `tzif` [rust crate][tzif-crate]
/// and adds offset lookups on top of it.
///
/// [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
/// [tzif-manual]: https://man7.org/linux/man-pages/man5/tzfile.5.html
/// [tzif-crate]: https://docs.rs/tzif/latest/tzif/
#[derive(Debug, Clone)]
pub struct Tzif {
    pub header1: TzifHeader,
    pub data_block1: DataBlock,
    pub header2: Option<TzifHeader>,
    pub data_block2: Option<DataBlock>,
    pub footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            header1,
            data_block1,
            header2,
            data_block2,
            footer,
        } = value;

        Self {
            header1,
            data_block1,
            header2,
            data_block2,
            footer,
        }
    }
}

impl Tzif {
    pub fn from_bytes(data: &[u8]) -> DateTimeResult<Self> {
        let Ok((parse_result, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(DateTimeError::general("Illformed Tzif data."));
        };
        Ok(Self::from(parse_result))
    }

    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.footer.as_ref()
    }

    pub fn get_data_block2(&self) -> DateTimeResult<&DataBlock> {
        self.data_block2
            .as_ref()
            .ok_or(DateTimeError::general("Only Tzif V2+ is supported."))
    }

    /// Returns the local time record in effect at `epoch_seconds`.
    pub fn get(&self, epoch_seconds: &Seconds) -> DateTimeResult<LocalTimeRecord> {
        let db = self.get_data_block2()?;

        if db.transition_times.is_empty() {
            return match self.posix_tz_string() {
                Some(posix) => resolve_posix_tz_string_for_epoch_seconds(posix, epoch_seconds.0),
                None => first_local_record(db),
            };
        }

        match db.transition_times.binary_search(epoch_seconds) {
            // The new record takes effect exactly at its transition time.
            Ok(idx) => get_local_record(db, idx),
            // Before the first transition, the first time type applies.
            Err(0) => first_local_record(db),
            Err(idx) if idx >= db.transition_times.len() => {
                // The epoch seconds are beyond the last transition, so the
                // time zone is resolved with the POSIX tz string.
                match self.posix_tz_string() {
                    Some(posix) => {
                        resolve_posix_tz_string_for_epoch_seconds(posix, epoch_seconds.0)
                    }
                    None => get_local_record(db, idx - 1),
                }
            }
            Err(idx) => get_local_record(db, idx - 1),
        }
    }
}

#[inline]
fn first_local_record(db: &DataBlock) -> DateTimeResult<LocalTimeRecord> {
    db.local_time_type_records
        .first()
        .copied()
        .map(Into::into)
        .datespan_unwrap()
}

#[inline]
fn get_local_record(db: &DataBlock, idx: usize) -> DateTimeResult<LocalTimeRecord> {
    // NOTE: Transition type can be empty. If no transition_type exists,
    // then use 0 as the default index of local_time_type_records.
    let type_idx = db.transition_types.get(idx).copied().unwrap_or(0);
    db.local_time_type_records
        .get(type_idx)
        .copied()
        .map(Into::into)
        .datespan_unwrap()
}

/// Resolve the footer of a tzif file for exact epoch seconds.
#[inline]
fn resolve_posix_tz_string_for_epoch_seconds(
    posix_tz_string: &PosixTzString,
    seconds: i64,
) -> DateTimeResult<LocalTimeRecord> {
    // POSIX offsets are written west of UTC.
    let std = LocalTimeRecord {
        is_dst: false,
        offset: -posix_tz_string.std_info.offset.0,
    };
    let Some(dst_variant) = &posix_tz_string.dst_info else {
        // Regardless of the time, there is one variant and we can return it.
        return Ok(std);
    };
    let dst = LocalTimeRecord {
        is_dst: true,
        offset: -dst_variant.variant_info.offset.0,
    };

    let local_days = (seconds + std.offset).div_euclid(SECONDS_PER_DAY);
    let (year, _, _) = utils::ymd_from_epoch_days(local_days);

    // NOTE:
    // STD -> DST == start, written in standard local time.
    // DST -> STD == end, written in daylight local time.
    let start = calculate_transition_seconds_for_year(year, &dst_variant.start_date, std.offset);
    let end = calculate_transition_seconds_for_year(year, &dst_variant.end_date, dst.offset);

    // Southern hemisphere zones start DST late in the year and end it early.
    let is_dst = if start < end {
        start <= seconds && seconds < end
    } else {
        seconds < end || start <= seconds
    };

    Ok(if is_dst { dst } else { std })
}

/// Returns the epoch seconds that a POSIX transition rule falls on in `year`.
///
/// `offset` is the UTC offset in effect right before the transition.
fn calculate_transition_seconds_for_year(
    year: i32,
    transition_date: &TransitionDate,
    offset: i64,
) -> i64 {
    let year_epoch_days = utils::epoch_days_for_year(year);
    let days_into_year = match transition_date.day {
        // Jn: 1..=365, February 29th is never counted.
        TransitionDay::NoLeap(day) => {
            let day = i64::from(day) - 1;
            if utils::is_leap(year) && day >= 59 {
                day + 1
            } else {
                day
            }
        }
        // n: 0..=365, February 29th is counted.
        TransitionDay::WithLeap(day) => i64::from(day),
        // Mm.w.d: day d (0 = Sunday) of week w (5 = last) of month m.
        TransitionDay::Mwd(month, week, day) => {
            let month = month as u8;
            let month_epoch_days = utils::epoch_days_from_gregorian_date(year, month, 1);
            let first_weekday = i64::from(utils::epoch_days_to_posix_day_of_week(month_epoch_days));
            let mut day_of_month =
                (i64::from(day) - first_weekday).rem_euclid(7) + (i64::from(week) - 1) * 7;
            if day_of_month >= i64::from(utils::iso_days_in_month(year, month)) {
                day_of_month -= 7;
            }
            month_epoch_days - year_epoch_days + day_of_month
        }
    };

    (year_epoch_days + days_into_year) * SECONDS_PER_DAY + transition_date.time.0 - offset
}

/// A `TimeZoneProvider` backed by the IANA time zone database that
/// `jiff-tzdb` bundles into the binary.
///
/// Each zone is parsed once and shared from the cache afterwards.
#[derive(Debug, Default)]
pub struct TzdbProvider {
    cache: RefCell<BTreeMap<String, Arc<Tzif>>>,
}

impl TzdbProvider {
    pub fn get(&self, identifier: &str) -> DateTimeResult<Arc<Tzif>> {
        if let Some(tzif) = self.cache.borrow().get(identifier) {
            return Ok(Arc::clone(tzif));
        }

        let Some((_, data)) = jiff_tzdb::get(identifier) else {
            return Err(DateTimeError::range().with_message("Time zone identifier does not exist."));
        };
        let tzif = Arc::new(Tzif::from_bytes(data)?);

        #[cfg(feature = "log")]
        log::debug!("Loaded time zone data for {identifier}.");

        self.cache
            .borrow_mut()
            .insert(identifier.to_string(), Arc::clone(&tzif));
        Ok(tzif)
    }
}

impl TimeZoneProvider for TzdbProvider {
    fn check_identifier(&self, identifier: &str) -> bool {
        self.get(identifier).is_ok()
    }

    fn get_named_tz_offset_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> DateTimeResult<i64> {
        let tzif = self.get(identifier)?;
        tzif.get(&Seconds(epoch_seconds)).map(|record| record.offset)
    }
}
