//! Numerology - Pythagorean reduction of calendar numbers.
//!
//! Birth-date and target-date components are reduced to a single digit
//! (or a master number) and mapped onto a static meaning table.

mod meanings;

pub use meanings::{number_meaning, NumberMeaning};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Numbers exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Numerology values and descriptors for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyData {
    pub life_path: u32,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    pub universal_day: u32,
    pub day_theme: String,
    pub energy_quality: String,
    pub favorable_for: Vec<String>,
    pub challenging_for: Vec<String>,
    pub master_number_active: bool,
    pub master_number_message: Option<String>,
}

/// Returns true for 11, 22 and 33.
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly sums decimal digits until the value is at most 9.
///
/// The result is in 1..=9, or 11, 22 or 33 when `keep_master` is set and the
/// reduction lands on one of them. Zero is the single fixed point outside that
/// range and comes back as 0. Negative inputs reduce like their magnitude.
pub fn reduce_to_single_digit(n: i64, keep_master: bool) -> u32 {
    let mut value = n.unsigned_abs();
    while value > 9 {
        if keep_master && value <= 33 && is_master_number(value as u32) {
            break;
        }
        value = digit_sum(value);
    }
    value as u32
}

fn reduce(n: i64) -> u32 {
    reduce_to_single_digit(n, true)
}

fn year_digits(year: i32) -> i64 {
    digit_sum(u64::from(year.unsigned_abs())) as i64
}

/// Life path: reduced month + reduced day + reduced year digit sum.
pub fn life_path(birth_date: NaiveDate) -> u32 {
    let month = reduce(i64::from(birth_date.month()));
    let day = reduce(i64::from(birth_date.day()));
    let year = reduce(year_digits(birth_date.year()));
    reduce(i64::from(month + day + year))
}

/// Personal year: the birth month and day combined with the target year.
pub fn personal_year(birth_date: NaiveDate, target_year: i32) -> u32 {
    let month = reduce(i64::from(birth_date.month()));
    let day = reduce(i64::from(birth_date.day()));
    let year = reduce(year_digits(target_year));
    reduce(i64::from(month + day + year))
}

pub fn personal_month(personal_year: u32, month: u32) -> u32 {
    reduce(i64::from(personal_year + month))
}

pub fn personal_day(personal_month: u32, day: u32) -> u32 {
    reduce(i64::from(personal_month + day))
}

/// Collective number for a calendar date; identical for every profile.
pub fn universal_day(date: NaiveDate) -> u32 {
    reduce(i64::from(date.month()) + i64::from(date.day()) + year_digits(date.year()))
}

/// Full numerology record for `target_date`.
///
/// `life_path` is the profile's cached value; it is computed when absent.
pub fn numerology_for_day(
    birth_date: NaiveDate,
    target_date: NaiveDate,
    life_path_number: Option<u32>,
) -> NumerologyData {
    let life_path = life_path_number.unwrap_or_else(|| life_path(birth_date));
    let personal_year = personal_year(birth_date, target_date.year());
    let personal_month = personal_month(personal_year, target_date.month());
    let personal_day = personal_day(personal_month, target_date.day());
    let universal_day = universal_day(target_date);

    let meaning = number_meaning(personal_day);
    let master_number_active = is_master_number(personal_day);

    NumerologyData {
        life_path,
        personal_year,
        personal_month,
        personal_day,
        universal_day,
        day_theme: meaning.theme.to_string(),
        energy_quality: meaning.quality.to_string(),
        favorable_for: to_strings(meaning.favorable),
        challenging_for: to_strings(meaning.challenging),
        master_number_active,
        master_number_message: if master_number_active {
            meaning.master_message.map(str::to_string)
        } else {
            None
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_digits_are_unchanged() {
        for i in 1..=9 {
            assert_eq!(reduce_to_single_digit(i, true), i as u32);
        }
    }

    #[test]
    fn double_digits_reduce() {
        assert_eq!(reduce_to_single_digit(15, true), 6);
        assert_eq!(reduce_to_single_digit(28, true), 1);
    }

    #[test]
    fn master_numbers_stop_reduction() {
        assert_eq!(reduce_to_single_digit(38, true), 11);
        assert_eq!(reduce_to_single_digit(38, false), 2);
        assert_eq!(reduce_to_single_digit(22, true), 22);
        assert_eq!(reduce_to_single_digit(33, false), 6);
    }

    #[test]
    fn zero_is_a_fixed_point() {
        assert_eq!(reduce_to_single_digit(0, true), 0);
        assert_eq!(reduce_to_single_digit(0, false), 0);
    }

    #[test]
    fn negative_numbers_reduce_like_their_magnitude() {
        assert_eq!(reduce_to_single_digit(-38, true), 11);
        assert_eq!(reduce_to_single_digit(-15, true), 6);
    }

    #[test]
    fn life_path_for_known_birth_date() {
        // 3 + 6 + (1+9+8+5=23 -> 5) = 14 -> 5
        assert_eq!(life_path(date(1985, 3, 15)), 5);
    }

    #[test]
    fn personal_cycle_chain() {
        let birth = date(1985, 3, 15);
        // 3 + 6 + (2+0+2+6=10 -> 1) = 10 -> 1
        assert_eq!(personal_year(birth, 2026), 1);
        assert_eq!(personal_month(1, 1), 2);
        assert_eq!(personal_day(2, 15), 8);
    }

    #[test]
    fn universal_day_is_profile_independent() {
        let target = date(2026, 1, 15);
        // 1 + 15 + 10 = 26 -> 8
        assert_eq!(universal_day(target), 8);
        let a = numerology_for_day(date(1985, 3, 15), target, None);
        let b = numerology_for_day(date(1990, 6, 15), target, None);
        assert_eq!(a.universal_day, b.universal_day);
    }

    #[test]
    fn cached_life_path_is_used_verbatim() {
        let data = numerology_for_day(date(1985, 3, 15), date(2026, 1, 15), Some(7));
        assert_eq!(data.life_path, 7);
    }

    #[test]
    fn master_personal_day_sets_flag_and_message() {
        // personal year 1 in January gives personal month 2; day 9 -> 11
        let data = numerology_for_day(date(1985, 3, 15), date(2026, 1, 9), None);
        assert_eq!(data.personal_day, 11);
        assert!(data.master_number_active);
        assert!(data.master_number_message.unwrap().starts_with("Master Number 11"));
    }

    #[test]
    fn ordinary_personal_day_has_no_master_message() {
        let data = numerology_for_day(date(1985, 3, 15), date(2026, 1, 15), None);
        assert_eq!(data.personal_day, 8);
        assert!(!data.master_number_active);
        assert!(data.master_number_message.is_none());
        assert_eq!(data.day_theme, "Abundance & Power");
    }

    proptest! {
        #[test]
        fn reduction_lands_in_valid_set(n in 1i64..10_000_000_000) {
            let r = reduce_to_single_digit(n, true);
            prop_assert!((1..=9).contains(&r) || is_master_number(r));
        }

        #[test]
        fn reduction_without_masters_is_single_digit(n in 1i64..10_000_000_000) {
            let r = reduce_to_single_digit(n, false);
            prop_assert!((1..=9).contains(&r));
        }

        #[test]
        fn only_zero_reduces_to_zero(n in -10_000_000_000i64..10_000_000_000) {
            let r = reduce_to_single_digit(n, true);
            prop_assert_eq!(r == 0, n == 0);
        }
    }
}
