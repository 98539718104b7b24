use alloc::borrow::ToOwned;
use core::{iter::Peekable, str::Chars};

use crate::{DateTimeError, DateTimeResult, TimeZone, UtcOffset};

use super::parse_digits;

/// Parses a time zone identifier: either a `±HH[:MM[:SS]]` offset or an
/// IANA-style name such as `America/Montreal`.
#[inline]
pub(crate) fn parse_identifier(source: &str) -> DateTimeResult<TimeZone> {
    let mut cursor = source.chars().peekable();
    if cursor.peek().is_some_and(is_ascii_sign) {
        let offset_seconds = parse_offset(&mut cursor)?;
        if cursor.peek().is_some() {
            return Err(invalid_identifier());
        }
        return Ok(TimeZone::UtcOffset(UtcOffset::from_seconds(offset_seconds)?));
    } else if parse_iana_component(&mut cursor) {
        return Ok(TimeZone::IanaIdentifier(source.to_owned()));
    }
    Err(invalid_identifier())
}

/// Parses a signed offset, returning seconds east of UTC.
///
/// The `:` separators are optional, but used either for both parts or neither.
#[inline]
fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> DateTimeResult<i64> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    let hours = parse_digits(chars, 2)?;

    let extended = chars.next_if_eq(&':').is_some();
    let has_minutes = extended || chars.peek().is_some_and(char::is_ascii_digit);
    let minutes = if has_minutes {
        parse_digits(chars, 2)?
    } else {
        0
    };

    let has_seconds = if extended {
        chars.next_if_eq(&':').is_some()
    } else {
        has_minutes && chars.peek().is_some_and(char::is_ascii_digit)
    };
    let seconds = if has_seconds {
        parse_digits(chars, 2)?
    } else {
        0
    };

    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(DateTimeError::range().with_message("Offset is out of range."));
    }

    Ok(sign * i64::from(hours * 3600 + minutes * 60 + seconds))
}

fn parse_iana_component(chars: &mut Peekable<Chars<'_>>) -> bool {
    // Confirm leading Tz char
    if !chars.peek().is_some_and(is_tz_leading_char) {
        return false;
    }
    chars.next();

    // Move and check that chars are an expected tz char
    while chars.peek().is_some_and(is_tz_char) {
        chars.next();
    }

    // Check for sub component and parse
    if chars.peek().is_some_and(is_slash) {
        chars.next();
        return parse_iana_component(chars);
    }

    // Confirm full source text has been parsed.
    chars.peek().is_none()
}

fn invalid_identifier() -> DateTimeError {
    DateTimeError::range().with_message("Invalid time zone identifier.")
}

fn is_ascii_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

fn is_slash(ch: &char) -> bool {
    *ch == '/'
}

fn is_tz_leading_char(ch: &char) -> bool {
    ch.is_ascii_alphabetic() || *ch == '.' || *ch == '_'
}

fn is_tz_char(ch: &char) -> bool {
    is_tz_leading_char(ch) || ch.is_ascii_digit() || *ch == '+' || *ch == '-'
}

#[cfg(test)]
mod tests {
    use super::parse_identifier;
    use crate::{TimeZone, UtcOffset};

    #[test]
    fn offsets() {
        assert_eq!(
            parse_identifier("+05:30").unwrap(),
            TimeZone::UtcOffset(UtcOffset::from_seconds(19_800).unwrap())
        );
        assert_eq!(
            parse_identifier("-0130").unwrap(),
            TimeZone::UtcOffset(UtcOffset::from_seconds(-5_400).unwrap())
        );
        assert_eq!(
            parse_identifier("+01:00:30").unwrap(),
            TimeZone::UtcOffset(UtcOffset::from_seconds(3_630).unwrap())
        );
        assert_eq!(
            parse_identifier("-08").unwrap(),
            TimeZone::UtcOffset(UtcOffset::from_seconds(-28_800).unwrap())
        );
        assert!(parse_identifier("+24:00").is_err());
        assert!(parse_identifier("+05:60").is_err());
        assert!(parse_identifier("+05:").is_err());
        assert!(parse_identifier("+05:30x").is_err());
    }

    #[test]
    fn names() {
        assert_eq!(
            parse_identifier("America/Argentina/Buenos_Aires").unwrap(),
            TimeZone::IanaIdentifier("America/Argentina/Buenos_Aires".into())
        );
        assert_eq!(
            parse_identifier("Etc/GMT+5").unwrap(),
            TimeZone::IanaIdentifier("Etc/GMT+5".into())
        );
        assert!(parse_identifier("America/").is_err());
        assert!(parse_identifier("/Montreal").is_err());
        assert!(parse_identifier("America Montreal").is_err());
    }
}
