//! Rotation distances on a combination lock whose wheels carry the digits
//! `0` to `9`.
//!
//! Each wheel behaves like Z/10Z: one click moves a digit up or down by one,
//! wrapping `9 -> 0` and `0 -> 9`. The cost of turning a whole code into
//! another is the sum of the per-wheel costs.

use crate::error::InputError;
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    iter,
    ops::Deref,
    str::FromStr,
};

/// Number of positions on every wheel.
pub const MODULUS: u8 = 10;

/// A single wheel position, always in `0..=9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value < MODULUS).then(|| Self(value))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_char(found: char, position: usize) -> Result<Self, InputError> {
        found
            .to_digit(u32::from(MODULUS))
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit { found, position })
    }

    #[must_use]
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fewest clicks needed to turn wheel position `x` into `y`.
///
/// Both directions round the wheel are measured; the result is the shorter
/// one and therefore never exceeds 5.
///
/// # Panics
///
/// If the two directional counts do not add up to a multiple of the
/// modulus. That can only happen through a bug in this function.
#[must_use]
pub fn distance(x: Digit, y: Digit) -> u8 {
    let (low, high) = if y < x { (y.0, x.0) } else { (x.0, y.0) };

    let clockwise = (high - low) % MODULUS;
    let anticlockwise = (low + MODULUS - high) % MODULUS;
    assert_eq!(
        (clockwise + anticlockwise) % MODULUS,
        0,
        "directional distances {} and {} between {} and {} do not close the wheel",
        clockwise,
        anticlockwise,
        low,
        high
    );

    clockwise.min(anticlockwise)
}

/// An ordered run of wheel positions, most significant wheel first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumericCode(Vec<Digit>);

impl NumericCode {
    /// Digits of this code left-padded with zeros up to `width`.
    ///
    /// A code already at least `width` long is yielded unchanged.
    pub fn padded(&self, width: usize) -> impl Iterator<Item = Digit> + '_ {
        iter::repeat(Digit::ZERO)
            .take(width.saturating_sub(self.0.len()))
            .chain(self.0.iter().copied())
    }
}

impl Deref for NumericCode {
    type Target = [Digit];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl iter::FromIterator<Digit> for NumericCode {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for NumericCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InputError::EmptyCode);
        }

        s.chars()
            .enumerate()
            .map(|(position, c)| Digit::from_char(c, position))
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl Display for NumericCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

/// How two codes of different lengths are lined up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthPolicy {
    /// Left-pad the shorter code with zeros.
    Pad,
    /// Refuse to compare codes of different lengths.
    Strict,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self::Pad
    }
}

/// Per-wheel distances between two codes, padded to a common width.
///
/// Lazy; [`total_distance`] is the sum of this sequence.
pub fn distances<'a>(
    first: &'a NumericCode,
    second: &'a NumericCode,
) -> impl Iterator<Item = u8> + 'a {
    let width = first.len().max(second.len());
    first
        .padded(width)
        .zip(second.padded(width))
        .map(|(x, y)| distance(x, y))
}

/// Fewest clicks to turn `first` into `second`, padding the shorter code.
#[must_use]
pub fn total_distance(first: &NumericCode, second: &NumericCode) -> u64 {
    distances(first, second).map(u64::from).sum()
}

/// [`total_distance`] under an explicit [`LengthPolicy`].
pub fn total_distance_with(
    first: &NumericCode,
    second: &NumericCode,
    policy: LengthPolicy,
) -> Result<u64, InputError> {
    if policy == LengthPolicy::Strict && first.len() != second.len() {
        return Err(InputError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    Ok(total_distance(first, second))
}
