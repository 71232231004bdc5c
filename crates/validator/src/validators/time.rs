//! Time range
//!
//! Instants are compared on the absolute timeline, so the bounds and the
//! instant may carry different offsets.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::foundation::{Validate, ValidationError};
use crate::messages::{defaults, render};

/// Returns `true` if `from <= instant <= to`, at nanosecond resolution.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fieldcheck::time_in_range;
///
/// let from = Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap();
/// let to = Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap();
///
/// assert!(time_in_range(&Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap(), &from, &to));
/// assert!(time_in_range(&from, &from, &to));
/// assert!(!time_in_range(&Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap(), &from, &to));
/// ```
#[inline]
pub fn time_in_range<Tz, Tf, Tt>(
    instant: &DateTime<Tz>,
    from: &DateTime<Tf>,
    to: &DateTime<Tt>,
) -> bool
where
    Tz: TimeZone,
    Tf: TimeZone,
    Tt: TimeZone,
{
    from <= instant && instant <= to
}

/// Validates that an instant lies within an inclusive time range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fieldcheck::foundation::Validate;
/// use fieldcheck::validators::between;
///
/// let rule = between(
///     Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap(),
/// );
/// assert!(rule.validate(&Utc.with_ymd_and_hms(2010, 6, 1, 0, 0, 0).unwrap()).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TimeRange<Tz: TimeZone> {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeRange<Tz> {
    #[must_use]
    pub fn new(from: DateTime<Tz>, to: DateTime<Tz>) -> Self {
        Self { from, to }
    }
}

impl<Tz> Validate for TimeRange<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    type Input = DateTime<Tz>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if time_in_range(input, &self.from, &self.to) {
            return Ok(());
        }

        Err(ValidationError::new(
            "time_in_range",
            render(defaults::TIME_IN_RANGE, &[&self.from, &self.to]),
        )
        .with_param("from", self.from.to_string())
        .with_param("to", self.to.to_string()))
    }
}

/// Creates a [`TimeRange`] rule.
#[must_use]
pub fn between<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> TimeRange<Tz> {
    TimeRange::new(from, to)
}

// ============================================================================
// TESTS
// ============================================================================
