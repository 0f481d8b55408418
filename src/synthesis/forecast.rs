use chrono::NaiveDate;

use super::condition::{sample_condition, Condition};
use super::models::{CurrentConditions, DayForecast};
use super::random::RandomSource;

pub const FORECAST_DAYS: usize = 14;

/// Base temperature for a report, an integer in `[15, 35)`
pub fn sample_base_temperature<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.offset_below(15, 20))
}

/// Seasonal drift applied on top of the base temperature
pub fn seasonal_variation(day_index: usize) -> f64 {
    (day_index as f64 * 0.1).sin() * 3.0
}

/// Temperature for a day: base plus seasonal drift plus noise in `[-2, 2)`.
/// Each call redraws the noise.
pub fn temperature_pattern<R: RandomSource + ?Sized>(
    base: f64,
    day_index: usize,
    rng: &mut R,
) -> i32 {
    let random_variation = (rng.next_unit() - 0.5) * 4.0;
    (base + seasonal_variation(day_index) + random_variation).round() as i32
}

pub fn build_current<R: RandomSource + ?Sized>(base: f64, rng: &mut R) -> CurrentConditions {
    CurrentConditions {
        temperature: temperature_pattern(base, 0, rng),
        condition: sample_condition(rng),
        humidity: 40 + rng.below(40),
        wind_speed: 5 + rng.below(25),
        pressure: 1000 + rng.below(100),
        visibility: 5 + rng.below(15),
        uv_index: rng.below(11),
    }
}

fn sample_precipitation<R: RandomSource + ?Sized>(condition: Condition, rng: &mut R) -> u32 {
    let (low, span) = condition.precipitation_range();
    rng.offset_below(low, span) as u32
}

pub fn build_day<R: RandomSource + ?Sized>(
    base: f64,
    day_index: usize,
    date: NaiveDate,
    rng: &mut R,
) -> DayForecast {
    let high = temperature_pattern(base, day_index, rng);
    let low = high - rng.below(8) as i32 - 5;
    let condition = sample_condition(rng);
    let precipitation = sample_precipitation(condition, rng);
    let wind_speed = 5 + rng.below(20);

    DayForecast {
        date,
        high,
        low,
        condition,
        precipitation,
        wind_speed,
    }
}

/// Build the consecutive daily forecast starting at `today`
pub fn build_forecast<R: RandomSource + ?Sized>(
    base: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DayForecast> {
    // Ends early at NaiveDate::MAX instead of repeating a date
    std::iter::successors(Some(today), |date| date.succ_opt())
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(i, date)| build_day(base, i, date, rng))
        .collect()
}
