use chrono::{Datelike, Duration, NaiveDate};
use common::{resolve, CalendarDate, EPOCH_YEAR};
use rayon::prelude::*;
use std::convert::TryFrom;

const SWEEP: i64 = 10_000_000;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(i32::try_from(EPOCH_YEAR).unwrap(), 1, 1).unwrap()
}

fn to_naive(date: CalendarDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(
        i32::try_from(date.year()).unwrap(),
        u32::from(date.month()),
        u32::from(date.day()),
    )
    .unwrap_or_else(|| panic!("{:?} is not a real date", date))
}

#[test]
fn agrees_with_chrono_over_sweep() {
    let epoch = epoch();

    (0..SWEEP).into_par_iter().for_each(|offset| {
        let expected = epoch + Duration::days(offset);
        let date = resolve(offset).unwrap();
        assert_eq!(
            date.ymd(),
            (
                i64::from(expected.year()),
                u8::try_from(expected.month()).unwrap(),
                u8::try_from(expected.day()).unwrap()
            ),
            "offset {} resolved to {:?}, expected {}",
            offset,
            date,
            expected
        );
    });
}

#[test]
fn day_count_round_trips() {
    let epoch = epoch();

    (0..SWEEP / 997).into_par_iter().map(|n| n * 997).for_each(|offset| {
        let date = to_naive(resolve(offset).unwrap());
        assert_eq!(
            date.signed_duration_since(epoch).num_days(),
            offset,
            "{} does not count back to offset {}",
            date,
            offset
        );
    });
}

#[test]
fn leap_days_across_centuries() {
    let epoch = epoch();
    let offset_of = |y: i32, m: u32, d: u32| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .signed_duration_since(epoch)
            .num_days()
    };

    for &year in &[2000, 2400, 2800] {
        let feb_29 = offset_of(year, 2, 29);
        assert_eq!(resolve(feb_29).unwrap().ymd(), (i64::from(year), 2, 29));
        assert_eq!(resolve(feb_29 + 1).unwrap().ymd(), (i64::from(year), 3, 1));
    }

    for &year in &[2100, 2200, 2300, 2500] {
        let feb_28 = offset_of(year, 2, 28);
        assert_eq!(resolve(feb_28).unwrap().ymd(), (i64::from(year), 2, 28));
        assert_eq!(resolve(feb_28 + 1).unwrap().ymd(), (i64::from(year), 3, 1));
    }
}

#[test]
fn every_resolved_date_is_real_and_ordered() {
    let dates = (0..5_000).map(|n| resolve(n * 37).unwrap()).collect::<Vec<_>>();

    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    dates.iter().copied().for_each(|d| {
        to_naive(d);
    });
}
