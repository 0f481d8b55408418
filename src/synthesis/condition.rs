use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::random::RandomSource;

/// Sky condition for a day or for the current observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorms,
    Drizzle,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Thunderstorms => "Thunderstorms",
            Self::Drizzle => "Drizzle",
        }
    }

    /// Precipitation chance for a day with this condition, as `(low, span)`
    /// where the value is drawn from `[low, low + span)`
    pub fn precipitation_range(self) -> (i32, u32) {
        match self {
            Self::Rainy | Self::Thunderstorms => (60, 30),
            Self::Drizzle => (40, 20),
            Self::Cloudy => (20, 30),
            Self::PartlyCloudy => (10, 20),
            Self::Sunny => (0, 15),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical distribution sampled by cumulative-sum selection
#[derive(Debug, Clone, Copy)]
pub struct WeightedChoice<T: 'static> {
    entries: &'static [(T, f64)],
    fallback: T,
}

impl<T: Copy + 'static> WeightedChoice<T> {
    pub const fn new(entries: &'static [(T, f64)], fallback: T) -> Self {
        Self { entries, fallback }
    }

    /// Walk entries in declared order, returning the first whose cumulative
    /// weight reaches the draw. Falls back when rounding leaves it unmatched.
    pub fn pick(&self, draw: f64) -> T {
        let mut cumulative = 0.0;
        for &(value, weight) in self.entries {
            cumulative += weight;
            if draw <= cumulative {
                return value;
            }
        }
        self.fallback
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T {
        self.pick(rng.next_unit())
    }
}

pub const CONDITION_WEIGHTS: WeightedChoice<Condition> = WeightedChoice::new(
    &[
        (Condition::Sunny, 0.30),
        (Condition::PartlyCloudy, 0.25),
        (Condition::Cloudy, 0.20),
        (Condition::Rainy, 0.15),
        (Condition::Thunderstorms, 0.05),
        (Condition::Drizzle, 0.05),
    ],
    Condition::Sunny,
);

/// Draw one condition from the fixed weather distribution
pub fn sample_condition<R: RandomSource + ?Sized>(rng: &mut R) -> Condition {
    CONDITION_WEIGHTS.sample(rng)
}
