use super::models::{DayForecast, FarmingInsights};

/// Aggregates the insight rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightInputs {
    pub humidity: u32,
    /// Days with precipitation above 30%
    pub rain_days: usize,
    pub mean_wind_speed: f64,
}

impl InsightInputs {
    pub fn from_forecast(humidity: u32, forecast: &[DayForecast]) -> Self {
        let rain_days = forecast.iter().filter(|day| day.precipitation > 30).count();
        let mean_wind_speed = if forecast.is_empty() {
            0.0
        } else {
            forecast
                .iter()
                .map(|day| f64::from(day.wind_speed))
                .sum::<f64>()
                / forecast.len() as f64
        };

        Self {
            humidity,
            rain_days,
            mean_wind_speed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Irrigation,
    Planting,
    Harvesting,
    PestManagement,
}

struct InsightRule {
    applies: fn(&InsightInputs) -> bool,
    overrides: &'static [(Field, &'static str)],
}

fn humid(i: &InsightInputs) -> bool {
    i.humidity > 70
}

fn arid(i: &InsightInputs) -> bool {
    i.humidity < 40
}

fn wet_fortnight(i: &InsightInputs) -> bool {
    i.rain_days > 7
}

fn dry_fortnight(i: &InsightInputs) -> bool {
    i.rain_days < 2
}

fn windy(i: &InsightInputs) -> bool {
    i.mean_wind_speed > 20.0
}

/// Applied top to bottom; a later rule overwrites fields set earlier.
const RULES: &[InsightRule] = &[
    InsightRule {
        applies: humid,
        overrides: &[
            (Field::Irrigation, "Reduce irrigation due to high humidity levels"),
            (
                Field::PestManagement,
                "Increased risk of fungal diseases - monitor closely",
            ),
        ],
    },
    InsightRule {
        applies: arid,
        overrides: &[(
            Field::Irrigation,
            "Increase irrigation frequency due to low humidity",
        )],
    },
    InsightRule {
        applies: wet_fortnight,
        overrides: &[
            (Field::Planting, "Delay planting until drier conditions"),
            (Field::Harvesting, "Postpone harvesting until weather improves"),
        ],
    },
    InsightRule {
        applies: dry_fortnight,
        overrides: &[
            (
                Field::Planting,
                "Excellent planting conditions - soil preparation recommended",
            ),
            (
                Field::Harvesting,
                "Ideal harvesting weather - prioritize sensitive crops",
            ),
        ],
    },
    InsightRule {
        applies: windy,
        overrides: &[
            (
                Field::PestManagement,
                "High winds may help disperse pests but could damage crops",
            ),
            (
                Field::Harvesting,
                "Use caution with tall crops due to wind conditions",
            ),
        ],
    },
];

impl Default for FarmingInsights {
    fn default() -> Self {
        Self {
            irrigation: "Standard irrigation schedule recommended".to_string(),
            planting: "Good conditions for most crops".to_string(),
            harvesting: "Weather suitable for harvesting activities".to_string(),
            pest_management: "Normal pest monitoring recommended".to_string(),
        }
    }
}

impl FarmingInsights {
    fn set(&mut self, field: Field, message: &str) {
        let slot = match field {
            Field::Irrigation => &mut self.irrigation,
            Field::Planting => &mut self.planting,
            Field::Harvesting => &mut self.harvesting,
            Field::PestManagement => &mut self.pest_management,
        };
        *slot = message.to_string();
    }
}

pub fn derive_insights(inputs: &InsightInputs) -> FarmingInsights {
    let mut insights = FarmingInsights::default();
    for rule in RULES.iter().filter(|rule| (rule.applies)(inputs)) {
        for &(field, message) in rule.overrides {
            insights.set(field, message);
        }
    }
    insights
}

/// Derive farming insights from current humidity and the forecast
pub fn derive_farming_insights(humidity: u32, forecast: &[DayForecast]) -> FarmingInsights {
    derive_insights(&InsightInputs::from_forecast(humidity, forecast))
}
