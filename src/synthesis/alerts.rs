use super::models::{Alert, AlertKind, AlertPriority, DayForecast};

const EXTREME_HIGH_C: i32 = 35;
const EXTREME_LOW_C: i32 = 5;
const HEAVY_RAIN_PCT: u32 = 80;
const DRY_DAY_PCT: u32 = 10;
const DRY_SPELL_MIN_DAYS: usize = 6;

fn alert(kind: AlertKind, title: &str, message: &str, priority: AlertPriority) -> Alert {
    Alert {
        kind,
        title: title.to_string(),
        message: message.to_string(),
        priority,
    }
}

/// Derive alerts from the forecast. Order follows evaluation order
/// (temperature, rainfall, dry spell); never empty.
pub fn derive_alerts(forecast: &[DayForecast]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let extreme_temp = forecast
        .iter()
        .any(|day| day.high > EXTREME_HIGH_C || day.low < EXTREME_LOW_C);
    let heavy_rain = forecast.iter().any(|day| day.precipitation > HEAVY_RAIN_PCT);
    let dry_days = forecast
        .iter()
        .filter(|day| day.precipitation < DRY_DAY_PCT)
        .count();

    if extreme_temp {
        alerts.push(alert(
            AlertKind::Warning,
            "Extreme Temperature Alert",
            "Extreme temperatures detected in forecast. Take protective measures for crops.",
            AlertPriority::High,
        ));
    }

    if heavy_rain {
        alerts.push(alert(
            AlertKind::Warning,
            "Heavy Rainfall Warning",
            "Heavy rainfall expected. Check drainage systems and adjust irrigation.",
            AlertPriority::Medium,
        ));
    }

    if dry_days >= DRY_SPELL_MIN_DAYS {
        alerts.push(alert(
            AlertKind::Info,
            "Dry Period Forecast",
            "Extended dry period predicted. Plan irrigation accordingly.",
            AlertPriority::Medium,
        ));
    }

    if alerts.is_empty() {
        alerts.push(alert(
            AlertKind::Info,
            "Optimal Growing Conditions",
            "Weather conditions are favorable for most farming activities.",
            AlertPriority::Low,
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::condition::Condition;
    use chrono::NaiveDate;

    fn day(high: i32, low: i32, precipitation: u32) -> DayForecast {
        DayForecast {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            high,
            low,
            condition: Condition::Cloudy,
            precipitation,
            wind_speed: 10,
        }
    }

    fn mild_forecast() -> Vec<DayForecast> {
        vec![day(24, 14, 35); 14]
    }

    fn titles(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_default_alert_when_nothing_triggers() {
        let alerts = derive_alerts(&mild_forecast());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Optimal Growing Conditions");
        assert_eq!(alerts[0].priority, AlertPriority::Low);
        assert_eq!(alerts[0].kind, AlertKind::Info);
    }

    #[test]
    fn test_extreme_heat() {
        let mut forecast = mild_forecast();
        forecast[9] = day(36, 26, 35);
        let alerts = derive_alerts(&forecast);
        assert_eq!(titles(&alerts), vec!["Extreme Temperature Alert"]);
        assert_eq!(alerts[0].priority, AlertPriority::High);
    }

    #[test]
    fn test_extreme_cold() {
        let mut forecast = mild_forecast();
        forecast[0] = day(12, 4, 35);
        assert_eq!(titles(&derive_alerts(&forecast)), vec!["Extreme Temperature Alert"]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut forecast = mild_forecast();
        forecast[0] = day(35, 5, 80);
        assert_eq!(titles(&derive_alerts(&forecast)), vec!["Optimal Growing Conditions"]);
    }

    #[test]
    fn test_heavy_rain() {
        let mut forecast = mild_forecast();
        forecast[3] = day(24, 14, 81);
        let alerts = derive_alerts(&forecast);
        assert_eq!(titles(&alerts), vec!["Heavy Rainfall Warning"]);
        assert_eq!(alerts[0].priority, AlertPriority::Medium);
    }

    #[test]
    fn test_dry_period_needs_six_dry_days() {
        let mut forecast = mild_forecast();
        for entry in forecast.iter_mut().take(5) {
            *entry = day(24, 14, 9);
        }
        assert_eq!(titles(&derive_alerts(&forecast)), vec!["Optimal Growing Conditions"]);

        forecast[5] = day(24, 14, 0);
        let alerts = derive_alerts(&forecast);
        assert_eq!(titles(&alerts), vec!["Dry Period Forecast"]);
        assert_eq!(alerts[0].priority, AlertPriority::Medium);
        assert_eq!(alerts[0].kind, AlertKind::Info);
    }

    #[test]
    fn test_multiple_alerts_follow_evaluation_order() {
        let mut forecast = vec![day(24, 14, 5); 14];
        forecast[13] = day(38, 30, 85);
        assert_eq!(
            titles(&derive_alerts(&forecast)),
            vec![
                "Extreme Temperature Alert",
                "Heavy Rainfall Warning",
                "Dry Period Forecast"
            ]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let alerts = derive_alerts(&mild_forecast());
        let json = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["priority"], "low");
    }
}
