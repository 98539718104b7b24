//! Parsing of dates and times laid out by a simple field pattern, such as
//! `MM/dd/yyyy HH:mm:ss`.

use core::{iter::Peekable, str::Chars};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::Overflow,
    DateTimeError, DateTimeResult,
};

use super::{abrupt_end, parse_digits};

/// A field of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// How many digits a field reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Exact(usize),
    /// One digit, or two when a second digit follows.
    OneOrTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Field(Field, Width),
    Literal(char),
}

/// Splits a pattern into tokens.
///
/// Supported fields are `yyyy`, `MM`, `M`, `dd`, `d`, `HH`, `H`, `mm` and
/// `ss`. Any other ASCII letter is rejected, every other character must
/// appear literally in the source.
fn tokenize(pattern: &str) -> DateTimeResult<alloc::vec::Vec<Token>> {
    let mut tokens = alloc::vec::Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        if !ch.is_ascii_alphabetic() {
            tokens.push(Token::Literal(ch));
            continue;
        }
        let mut run = 1;
        while chars.next_if_eq(&ch).is_some() {
            run += 1;
        }
        let token = match (ch, run) {
            ('y', 4) => Token::Field(Field::Year, Width::Exact(4)),
            ('M', 2) => Token::Field(Field::Month, Width::Exact(2)),
            ('M', 1) => Token::Field(Field::Month, Width::OneOrTwo),
            ('d', 2) => Token::Field(Field::Day, Width::Exact(2)),
            ('d', 1) => Token::Field(Field::Day, Width::OneOrTwo),
            ('H', 2) => Token::Field(Field::Hour, Width::Exact(2)),
            ('H', 1) => Token::Field(Field::Hour, Width::OneOrTwo),
            ('m', 2) => Token::Field(Field::Minute, Width::Exact(2)),
            ('s', 2) => Token::Field(Field::Second, Width::Exact(2)),
            _ => {
                return Err(DateTimeError::syntax().with_message(alloc::format!(
                    "Unsupported pattern field of {run} '{ch}'."
                )))
            }
        };
        tokens.push(token);
    }
    Ok(tokens)
}

fn parse_field(chars: &mut Peekable<Chars<'_>>, width: Width) -> DateTimeResult<i32> {
    match width {
        Width::Exact(count) => Ok(parse_digits(chars, count)? as i32),
        Width::OneOrTwo => {
            let first = parse_digits(chars, 1)?;
            if chars.peek().is_some_and(char::is_ascii_digit) {
                let second = parse_digits(chars, 1)?;
                return Ok((first * 10 + second) as i32);
            }
            Ok(first as i32)
        }
    }
}

/// Parses `source` according to `pattern`.
///
/// The year, month and day are required. Missing time fields are zero. Fields
/// are checked strictly: `02/30/2024` is an error rather than a clamped date.
pub(crate) fn parse_with_pattern(source: &str, pattern: &str) -> DateTimeResult<IsoDateTime> {
    let tokens = tokenize(pattern)?;
    let mut fields: [Option<i32>; 6] = [None; 6];
    let mut chars = source.chars().peekable();

    for token in tokens {
        match token {
            Token::Literal(expected) => match chars.next() {
                Some(ch) if ch == expected => {}
                Some(ch) => {
                    return Err(DateTimeError::syntax().with_message(alloc::format!(
                        "Expected '{expected}' but found '{ch}'."
                    )))
                }
                None => return Err(abrupt_end()),
            },
            Token::Field(field, width) => {
                let slot = &mut fields[field as usize];
                if slot.is_some() {
                    return Err(DateTimeError::syntax()
                        .with_message("A pattern field is repeated."));
                }
                *slot = Some(parse_field(&mut chars, width)?);
            }
        }
    }

    if chars.peek().is_some() {
        return Err(
            DateTimeError::syntax().with_message("Unparsed text remains after the pattern.")
        );
    }

    let [Some(year), Some(month), Some(day), hour, minute, second] = fields else {
        return Err(DateTimeError::syntax()
            .with_message("A pattern must contain a year, a month and a day."));
    };

    let date = IsoDate::new_with_overflow(year, month, day, Overflow::Reject)?;
    let time = IsoTime::new(
        hour.unwrap_or(0),
        minute.unwrap_or(0),
        second.unwrap_or(0),
        0,
        0,
        0,
        Overflow::Reject,
    )?;
    IsoDateTime::new(date, time)
}
