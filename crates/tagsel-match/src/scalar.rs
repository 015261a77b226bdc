//! Scalar parsers for numbers, dates and time controls.
//!
//! Parsers read the leading part of a value and ignore trailing text, so
//! `"2700?"` still yields a rating of 2700 and `"1.5 hours"` a number.

use winnow::ascii::{digit0, digit1, multispace0};
use winnow::combinator::{alt, eof, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Years at or below this are too ambiguous to compare.
pub const MIN_YEAR: u32 = 100;
/// Years at or above this are treated as garbage.
pub const MAX_YEAR: u32 = 3000;

// ============ Numbers ============

fn unsigned(input: &mut &str) -> ModalResult<u32> {
    preceded((multispace0, opt('+')), digit1)
        .try_map(str::parse::<u32>)
        .parse_next(input)
}

fn float(input: &mut &str) -> ModalResult<f64> {
    preceded(
        multispace0,
        (
            opt(one_of(['+', '-'])),
            alt((
                (digit1, opt(('.', digit0))).void(),
                ('.', digit1).void(),
            )),
            opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
        )
            .take(),
    )
    .try_map(str::parse::<f64>)
    .parse_next(input)
}

fn numeric_literal(input: &mut &str) -> ModalResult<()> {
    (
        opt(one_of(['+', '-'])),
        take_while(0.., |c: char| c.is_ascii_digit() || c == '.'),
        eof,
    )
        .void()
        .parse_next(input)
}

/// Parse the unsigned integer at the start of `text`.
pub fn leading_unsigned(text: &str) -> Option<u32> {
    let mut input = text;
    unsigned.parse_next(&mut input).ok()
}

/// Parse the floating-point number at the start of `text`.
pub fn leading_float(text: &str) -> Option<f64> {
    let mut input = text;
    float.parse_next(&mut input).ok()
}

/// Whether `text` is shaped like a number: an optional sign followed only by
/// digits and dots.
///
/// Deliberately lenient: `"1.2.3"` and the empty string both qualify.
pub fn looks_numeric(text: &str) -> bool {
    let mut input = text;
    numeric_literal.parse_next(&mut input).is_ok()
}

// ============ Dates ============

/// A `year[.month[.day]]` date. Missing parts default to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

fn date(input: &mut &str) -> ModalResult<GameDate> {
    let year = unsigned.parse_next(input)?;
    let month = opt(preceded('.', unsigned)).parse_next(input)?;
    let day = match month {
        Some(_) => opt(preceded('.', unsigned)).parse_next(input)?,
        None => None,
    };
    Ok(GameDate {
        year,
        month: month.unwrap_or(1),
        day: day.unwrap_or(1),
    })
}

impl GameDate {
    /// Parse a date; `None` when there is no leading year.
    pub fn parse(text: &str) -> Option<Self> {
        let mut input = text;
        date.parse_next(&mut input).ok()
    }

    /// Single comparable magnitude: `year*10000 + month*100 + day`.
    pub fn encode(&self) -> f64 {
        10000.0 * f64::from(self.year) + 100.0 * f64::from(self.month) + f64::from(self.day)
    }

    pub fn year_in_range(&self) -> bool {
        self.year > MIN_YEAR && self.year < MAX_YEAR
    }
}

// ============ Time controls ============

/// The first control of a TimeControl tag value, with its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControl<'a> {
    /// The value up to the first `:`.
    pub control: &'a str,
    pub period: u32,
}

impl<'a> TimeControl<'a> {
    /// Recognizes `period+increment`, `*period` (sandclock), `moves/period`
    /// and a bare `period` (sudden death). Unknown (`?`) and no control
    /// (`-`) give `None`.
    pub fn parse(text: &'a str) -> Option<Self> {
        if text.is_empty() || text.starts_with(['?', '-']) {
            return None;
        }
        let control = text.split_once(':').map_or(text, |(first, _)| first);

        let period = if control.contains('+') {
            leading_unsigned(control)
        } else if let Some(sandclock) = control.strip_prefix('*') {
            leading_unsigned(sandclock)
        } else if let Some((_, seconds)) = control.split_once('/') {
            leading_unsigned(seconds)
        } else if !control.is_empty() && control.bytes().all(|b| b.is_ascii_digit()) {
            leading_unsigned(control)
        } else {
            None
        }?;

        Some(TimeControl { control, period })
    }
}
