#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod calendar;
pub mod error;
pub mod wheel;

pub use calendar::{
    days_in_month, is_leap_year, parse_offset, resolve, CalendarDate,
    PeriodBlock, EPOCH_YEAR,
};
pub use error::InputError;
pub use wheel::{
    distance, distances, total_distance, total_distance_with, Digit,
    LengthPolicy, NumericCode,
};
