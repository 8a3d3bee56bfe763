//! Day offsets from 1 January 1990 resolved to proleptic Gregorian dates.
//!
//! Rather than walking the calendar a day or a year at a time, [`resolve`]
//! peels whole periods of known length off the offset. Counting from a
//! 1 March reference keeps every leap day at the very end of its period, so
//! 400, 100 and 4 year runs have fixed lengths as long as the 100 and 4 year
//! runs are never taken past the end of their parent period.

use crate::error::InputError;
use std::fmt;
use tracing::trace;

/// Year of the epoch. Offset 0 is 1 January of this year.
///
/// The re-anchoring constants below assume this exact year: the first leap
/// day falls in `EPOCH_YEAR + 2` and `EPOCH_YEAR + 10` is a multiple of 400.
pub const EPOCH_YEAR: i64 = 1990;

/// Offsets below this end before 1 January of the first year following the
/// first leap day.
const FIRST_LEAP_THRESHOLD: i64 = 3 * 365;
/// 1 January 1990 to 1 March 1992.
const EPOCH_TO_FIRST_MARCH: i64 = 2 * 365 + 31 + 29;
/// 1 March to the following 1 January.
const MARCH_TO_JANUARY: i64 = 306;

const MONTHS: u8 = 12;

/// A fixed run of days counted from a 1 March reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodBlock {
    FourCenturies,
    Century,
    FourYears,
    Year,
}

impl PeriodBlock {
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::FourCenturies => 146_097,
            Self::Century => 36_524,
            Self::FourYears => 1_461,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub const fn years(self) -> i64 {
        match self {
            Self::FourCenturies => 400,
            Self::Century => 100,
            Self::FourYears => 4,
            Self::Year => 1,
        }
    }

    /// Most blocks of this size that may be taken in one go.
    ///
    /// The last century of a 400 year run and the last four years of a
    /// century differ in length from their siblings, so taking one more
    /// than the cap would step over a leap day that isn't there (or miss
    /// one that is).
    #[must_use]
    pub const fn cap(self) -> Option<i64> {
        match self {
            Self::FourCenturies => None,
            Self::Century => Some(3),
            Self::FourYears => Some(24),
            Self::Year => Some(4),
        }
    }
}

/// Periods peeled off once the reference is 1 March 2000, largest first.
const CASCADE: [PeriodBlock; 3] = [
    PeriodBlock::FourCenturies,
    PeriodBlock::Century,
    PeriodBlock::FourYears,
];

#[must_use]
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn month_lengths(year: i64) -> [u8; MONTHS as usize] {
    let february = if is_leap_year(year) { 29 } else { 28 };
    [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

/// Length of `month` (1-based) in `year`, `None` outside `1..=12`.
#[must_use]
pub fn days_in_month(year: i64, month: u8) -> Option<u8> {
    let index = usize::from(month.checked_sub(1)?);
    month_lengths(year).get(index).copied()
}

/// A resolved `(year, month, day)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i64,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub const EPOCH: Self = Self {
        year: EPOCH_YEAR,
        month: 1,
        day: 1,
    };

    #[must_use]
    #[inline]
    pub fn year(self) -> i64 {
        self.year
    }

    #[must_use]
    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn ymd(self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// Formats as `DD/MM/YYYY`.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Days still to place, and the date (always the 1st of `month`) they
/// count from.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    remaining: i64,
    year: i64,
    month: u8,
}

impl Cursor {
    fn at_epoch(offset: i64) -> Self {
        Self {
            remaining: offset,
            year: EPOCH_YEAR,
            month: 1,
        }
    }

    /// Moves the reference forward by a stretch whose length is known.
    fn reanchor(&mut self, days: i64, years: i64, month: u8) {
        self.remaining -= days;
        self.year += years;
        self.month = month;
        assert!(
            self.remaining >= 0,
            "re-anchored past the target by {} days",
            -self.remaining
        );
    }

    /// Takes as many whole `block`s as fit, up to the block's cap.
    fn take(&mut self, block: PeriodBlock) {
        let mut count = num_integer::div_floor(self.remaining, block.days());
        if let Some(cap) = block.cap() {
            count = count.min(cap);
        }
        if count == 0 {
            return;
        }

        self.remaining -= count * block.days();
        self.year += count * block.years();
        trace!(
            ?block,
            count,
            year = self.year,
            remaining = self.remaining,
            "took period blocks"
        );
        assert!(self.remaining >= 0);
    }

    /// Places what is left within the reference year, month by month.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn settle(self) -> CalendarDate {
        let lengths = month_lengths(self.year);
        let mut remaining = self.remaining;

        for month in self.month..=MONTHS {
            let length = i64::from(lengths[usize::from(month - 1)]);
            if remaining < length {
                return CalendarDate {
                    year: self.year,
                    month,
                    day: remaining as u8 + 1,
                };
            }
            remaining -= length;
        }

        unreachable!(
            "{} days left over after December {}",
            remaining, self.year
        )
    }
}

/// Resolves `offset` days after 1 January 1990 to a calendar date.
///
/// Period boundaries are closed on the left: an offset landing exactly on
/// one belongs to the period that starts there.
///
/// # Errors
///
/// [`InputError::NegativeOffset`] for offsets before the epoch.
pub fn resolve(offset: i64) -> Result<CalendarDate, InputError> {
    if offset < 0 {
        return Err(InputError::NegativeOffset { offset });
    }

    let mut cursor = Cursor::at_epoch(offset);
    if offset >= FIRST_LEAP_THRESHOLD {
        cursor.reanchor(EPOCH_TO_FIRST_MARCH, 2, 3);

        let four_years = PeriodBlock::FourYears.days();
        if (four_years..2 * four_years).contains(&cursor.remaining) {
            cursor.reanchor(four_years, 4, 3);
        } else if cursor.remaining >= 2 * four_years {
            // 1 March 2000 opens a full 400 year run.
            cursor.reanchor(2 * four_years, 8, 3);
            for &block in &CASCADE {
                cursor.take(block);
            }
        }

        if cursor.remaining >= MARCH_TO_JANUARY {
            cursor.reanchor(MARCH_TO_JANUARY, 1, 1);
        }
    }
    cursor.take(PeriodBlock::Year);

    Ok(cursor.settle())
}

/// Parses a day offset from text and rejects anything before the epoch.
///
/// # Errors
///
/// [`InputError::InvalidOffset`] if `text` isn't an integer,
/// [`InputError::NegativeOffset`] if it is below zero.
pub fn parse_offset(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    let offset = text
        .parse::<i64>()
        .map_err(|source| InputError::InvalidOffset {
            text: text.to_owned(),
            source,
        })?;

    if offset < 0 {
        return Err(InputError::NegativeOffset { offset });
    }
    Ok(offset)
}
