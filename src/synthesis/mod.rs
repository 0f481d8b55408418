//! Synthetic weather-and-advisory generation.
//!
//! Everything here is a pure function of an injected [`RandomSource`] and the
//! date treated as "today". Reports are built in one linear pass:
//! current conditions, forecast, alerts, insights, predictions.

pub mod alerts;
pub mod condition;
pub mod forecast;
pub mod insights;
pub mod models;
pub mod predictions;
pub mod random;

use chrono::NaiveDate;

pub use condition::Condition;
pub use models::*;
pub use random::{RandomSource, RngSource};

/// Build a complete report for `location`.
///
/// `location` is echoed back untouched; validation belongs to the caller.
pub fn synthesize<R: RandomSource + ?Sized>(
    location: &str,
    today: NaiveDate,
    rng: &mut R,
) -> WeatherReport {
    let base = forecast::sample_base_temperature(rng);
    tracing::debug!(location = %location, base_temperature = base, "Synthesizing report");

    let current = forecast::build_current(base, rng);
    let forecast = forecast::build_forecast(base, today, rng);
    let farming_insights = insights::derive_farming_insights(current.humidity, &forecast);
    let alerts = alerts::derive_alerts(&forecast);
    let ai_predictions = predictions::derive_predictions(&forecast, rng);

    WeatherReport {
        location: location.to_string(),
        current,
        forecast,
        alerts,
        farming_insights,
        ai_predictions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use random::SequenceSource;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_echoes_location_verbatim() {
        for location in ["Test Farm", "  padded  ", "Ферма №1", "a"] {
            let report = synthesize(location, today(), &mut RngSource::seeded(3));
            assert_eq!(report.location, location);
        }
    }

    #[test]
    fn test_report_invariants_across_seeds() {
        for seed in 0..300 {
            let report = synthesize("Test Farm", today(), &mut RngSource::seeded(seed));

            assert_eq!(report.forecast.len(), forecast::FORECAST_DAYS);
            assert_eq!(report.forecast[0].date, today());
            assert!(!report.alerts.is_empty());
            assert!((85..95).contains(&report.ai_predictions.confidence));
            assert_eq!(report.ai_predictions.recommendations.len(), 3);

            let current = &report.current;
            assert!((40..80).contains(&current.humidity));
            assert!((5..30).contains(&current.wind_speed));
            assert!((1000..1100).contains(&current.pressure));
            assert!((5..20).contains(&current.visibility));
            assert!(current.uv_index <= 10);

            for day in &report.forecast {
                assert!(day.low < day.high);
                assert!(day.precipitation <= 90);
            }
        }
    }

    #[test]
    fn test_fixed_sequence_consumes_expected_draws() {
        // base + 7 current fields + 14 days * 5 fields + confidence
        let mut rng = SequenceSource::constant(0.5);
        synthesize("Test Farm", today(), &mut rng);
        assert_eq!(rng.consumed(), 1 + 7 + 14 * 5 + 1);
    }

    #[test]
    fn test_fixed_sequence_gives_exact_report() {
        // 0.5 everywhere: base 25, Partly Cloudy days at 20% precipitation,
        // wind 15, humidity 60.
        let report = synthesize("Test Farm", today(), &mut SequenceSource::constant(0.5));

        assert_eq!(report.current.temperature, 25);
        assert_eq!(report.current.condition, Condition::PartlyCloudy);
        assert_eq!(report.current.humidity, 60);
        assert!(report
            .forecast
            .iter()
            .all(|day| day.precipitation == 20 && day.wind_speed == 15));
        assert_eq!(report.forecast[0].high - report.forecast[0].low, 9);

        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].title, "Optimal Growing Conditions");
        assert_eq!(report.alerts[0].priority, AlertPriority::Low);

        assert_eq!(
            report.farming_insights.planting,
            "Excellent planting conditions - soil preparation recommended"
        );
        assert_eq!(report.ai_predictions.confidence, 90);
    }

    #[test]
    fn test_independent_sources_differ() {
        let a = synthesize("Test Farm", today(), &mut RngSource::seeded(1));
        let b = synthesize("Test Farm", today(), &mut RngSource::seeded(2));
        let a = serde_json::to_value(&a).unwrap();
        let b = serde_json::to_value(&b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialized_field_names() {
        let report = synthesize("Test Farm", today(), &mut RngSource::seeded(5));
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["current"]["windSpeed"].is_number());
        assert!(json["current"]["uvIndex"].is_number());
        assert_eq!(json["forecast"][0]["date"], "2024-06-01");
        assert_eq!(json["forecast"][13]["date"], "2024-06-14");
        assert!(json["farmingInsights"]["pestManagement"].is_string());
        assert!(json["aiPredictions"]["recommendations"].is_array());
    }
}
