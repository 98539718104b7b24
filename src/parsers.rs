//! This module implements RFC 9557 date and time parsing on top of `ixdtf`,
//! along with the formatting of dates and times.
use alloc::{format, string::String};
use core::{fmt, iter::Peekable, str::Chars};

use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{
        DateRecord, IxdtfParseRecord, Sign, TimeRecord, TimeZoneRecord, UtcOffsetRecord,
        UtcOffsetRecordOrZ,
    },
    ParseError,
};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::Overflow,
    time::EpochNanoseconds,
    DateTimeError, DateTimeResult,
};

mod pattern;
mod timezone;

pub(crate) use pattern::parse_with_pattern;
pub(crate) use timezone::parse_identifier;

/// The UTC offset written in a date-time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedOffset {
    /// The `Z` designator: the time is UTC, but the local offset is unknown.
    Z,
    /// A numeric offset in seconds east of UTC.
    Seconds(i64),
}

impl ParsedOffset {
    pub(crate) const fn nanoseconds(self) -> i64 {
        match self {
            Self::Z => 0,
            Self::Seconds(seconds) => seconds * 1_000_000_000,
        }
    }
}

/// The fields of a parsed date-time string, before they are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateTimeRecord {
    pub(crate) date: IsoDate,
    pub(crate) time: Option<IsoTime>,
    pub(crate) offset: Option<ParsedOffset>,
    pub(crate) time_zone: Option<String>,
}

impl DateTimeRecord {
    /// Returns the local date-time, with a missing time read as midnight.
    pub(crate) fn date_time(&self) -> DateTimeResult<IsoDateTime> {
        IsoDateTime::new(self.date, self.time.unwrap_or_default())
    }
}

/// Parses a date such as `2024-01-10`. A time may follow but is ignored.
pub(crate) fn parse_date(source: &str) -> DateTimeResult<IsoDate> {
    let record = parse_date_time_record(source)?;
    reject_z(&record)?;
    Ok(record.date)
}

/// Parses a local date-time such as `2024-01-10T09:00:00`. A missing time is
/// read as midnight.
pub(crate) fn parse_date_time(source: &str) -> DateTimeResult<IsoDateTime> {
    let record = parse_date_time_record(source)?;
    reject_z(&record)?;
    record.date_time()
}

/// Parses an exact time, which needs both a time and an offset, such as
/// `2024-01-10T14:00:00Z`.
pub(crate) fn parse_instant(source: &str) -> DateTimeResult<EpochNanoseconds> {
    let record = parse_date_time_record(source)?;
    let (Some(time), Some(offset)) = (record.time, record.offset) else {
        return Err(DateTimeError::syntax()
            .with_message("An instant requires a time and a UTC offset."));
    };
    let local = IsoDateTime::new(record.date, time)?;
    let nanoseconds = local.as_nanoseconds() - i128::from(offset.nanoseconds());
    let epoch_nanoseconds = EpochNanoseconds::from(nanoseconds);
    epoch_nanoseconds.check_validity()?;
    Ok(epoch_nanoseconds)
}

/// Parses a zoned date-time such as `2024-01-10T09:00:00-05:00[America/Montreal]`.
pub(crate) fn parse_zoned_date_time(source: &str) -> DateTimeResult<DateTimeRecord> {
    let record = parse_date_time_record(source)?;
    if record.time.is_none() {
        return Err(
            DateTimeError::syntax().with_message("A zoned date-time requires a time.")
        );
    }
    Ok(record)
}

fn reject_z(record: &DateTimeRecord) -> DateTimeResult<()> {
    if record.offset == Some(ParsedOffset::Z) {
        return Err(DateTimeError::range()
            .with_message("UTC designator is not valid for a local date or time."));
    }
    Ok(())
}

// ==== `ixdtf` record conversion ====

fn parse_date_time_record(source: &str) -> DateTimeResult<DateTimeRecord> {
    let record: IxdtfParseRecord<'_, Utf8> = IxdtfParser::from_str(source)
        .parse()
        .map_err(map_parse_error)?;

    if let Some(calendar) = record.calendar {
        if !calendar.eq_ignore_ascii_case(b"iso8601") {
            return Err(DateTimeError::range().with_message(format!(
                "Unsupported calendar: {}.",
                String::from_utf8_lossy(calendar)
            )));
        }
    }

    let Some(date) = record.date else {
        return Err(
            DateTimeError::syntax().with_message("Date-time strings must contain a date.")
        );
    };

    let offset = match record.offset {
        Some(UtcOffsetRecordOrZ::Z) => Some(ParsedOffset::Z),
        Some(UtcOffsetRecordOrZ::Offset(offset)) => {
            Some(ParsedOffset::Seconds(offset_seconds(&offset)?))
        }
        None => None,
    };

    let time_zone = match record.tz.map(|annotation| annotation.tz) {
        Some(TimeZoneRecord::Name(name)) => Some(String::from_utf8_lossy(name).into_owned()),
        Some(TimeZoneRecord::Offset(offset)) => {
            let sign = match offset.sign {
                Sign::Negative => '-',
                Sign::Positive => '+',
            };
            Some(format!("{sign}{:02}:{:02}", offset.hour, offset.minute))
        }
        Some(_) => {
            return Err(DateTimeError::syntax().with_message("Unsupported time zone annotation."))
        }
        None => None,
    };

    Ok(DateTimeRecord {
        date: iso_date_from_record(date)?,
        time: record.time.map(iso_time_from_record).transpose()?,
        offset,
        time_zone,
    })
}

fn iso_date_from_record(record: DateRecord) -> DateTimeResult<IsoDate> {
    IsoDate::new_with_overflow(
        record.year,
        record.month.into(),
        record.day.into(),
        Overflow::Reject,
    )
}

fn iso_time_from_record(record: TimeRecord) -> DateTimeResult<IsoTime> {
    let nanoseconds = match record.fraction {
        Some(fraction) => fraction.to_nanoseconds().ok_or(
            DateTimeError::syntax()
                .with_message("Fractional seconds exceed nanosecond precision."),
        )?,
        None => 0,
    };
    // A leap second is read as the last second of the minute.
    let second = record.second.min(59);
    IsoTime::new(
        record.hour.into(),
        record.minute.into(),
        second.into(),
        (nanoseconds / 1_000_000) as i32,
        (nanoseconds / 1_000 % 1_000) as i32,
        (nanoseconds % 1_000) as i32,
        Overflow::Reject,
    )
}

/// Returns the offset in whole seconds east of UTC.
fn offset_seconds(record: &UtcOffsetRecord) -> DateTimeResult<i64> {
    if let Some(fraction) = record.fraction() {
        if fraction.to_nanoseconds() != Some(0) {
            return Err(DateTimeError::range()
                .with_message("Sub-second UTC offsets are not supported."));
        }
    }
    let seconds = i64::from(record.hour()) * 3600
        + i64::from(record.minute()) * 60
        + i64::from(record.second().unwrap_or(0));
    Ok(seconds * i64::from(record.sign() as i8))
}

fn map_parse_error(err: ParseError) -> DateTimeError {
    DateTimeError::syntax().with_message(format!("{err}"))
}

// ==== Cursor helpers for identifiers and patterns ====

pub(crate) fn parse_digits(chars: &mut Peekable<Chars<'_>>, count: usize) -> DateTimeResult<u32> {
    let mut value = 0;
    for _ in 0..count {
        let digit = chars.next_if(char::is_ascii_digit).ok_or_else(|| {
            if chars.peek().is_none() {
                abrupt_end()
            } else {
                non_ascii_digit()
            }
        })?;
        value = value * 10 + digit_value(digit);
    }
    Ok(value)
}

#[inline]
fn digit_value(ch: char) -> u32 {
    ch as u32 - '0' as u32
}

pub(crate) fn abrupt_end() -> DateTimeError {
    DateTimeError::syntax().with_message("Abrupt end while parsing date-time string.")
}

pub(crate) fn non_ascii_digit() -> DateTimeError {
    DateTimeError::syntax().with_message("Non ascii digit found while parsing date-time string.")
}

// ==== Formatting ====

/// Writes `YYYY-MM-DD`, switching to a signed six-digit year outside `0..=9999`.
pub(crate) fn write_date<W: fmt::Write + ?Sized>(sink: &mut W, date: &IsoDate) -> fmt::Result {
    write_year(date.year, sink)?;
    write!(sink, "-{:02}-{:02}", date.month, date.day)
}

/// Writes `YYYY-MM-DDTHH:MM:SS`, followed by the fraction of the second with
/// trailing zeros removed.
pub(crate) fn write_date_time<W: fmt::Write + ?Sized>(
    sink: &mut W,
    date_time: &IsoDateTime,
) -> fmt::Result {
    write_date(sink, &date_time.date)?;
    let time = &date_time.time;
    write!(
        sink,
        "T{:02}:{:02}:{:02}",
        time.hour, time.minute, time.second
    )?;
    let nanosecond = u32::from(time.millisecond) * 1_000_000
        + u32::from(time.microsecond) * 1_000
        + u32::from(time.nanosecond);
    write_nanosecond(nanosecond, sink)
}

fn write_year<W: fmt::Write + ?Sized>(year: i32, sink: &mut W) -> fmt::Result {
    if (0..=9999).contains(&year) {
        write!(sink, "{year:04}")
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        write!(sink, "{sign}{:06}", year.unsigned_abs())
    }
}

fn write_nanosecond<W: fmt::Write + ?Sized>(nanosecond: u32, sink: &mut W) -> fmt::Result {
    if nanosecond == 0 {
        return Ok(());
    }
    let mut digits = 9;
    let mut value = nanosecond;
    while value % 10 == 0 {
        value /= 10;
        digits -= 1;
    }
    write!(sink, ".{value:0digits$}")
}
