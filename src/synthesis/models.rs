use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::condition::Condition;

// ============================================================================
// Report Models (what we return to clients)
// ============================================================================

/// Full synthesized weather payload for one location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DayForecast>,
    pub alerts: Vec<Alert>,
    pub farming_insights: FarmingInsights,
    pub ai_predictions: AiPredictions,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: i32,
    pub condition: Condition,
    /// Relative humidity, percent
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// hPa
    pub pressure: u32,
    /// km
    pub visibility: u32,
    pub uv_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
    /// Chance of precipitation, percent
    pub precipitation: u32,
    pub wind_speed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmingInsights {
    pub irrigation: String,
    pub planting: String,
    pub harvesting: String,
    pub pest_management: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AiPredictions {
    pub summary: String,
    /// Synthetic confidence score in `[85, 95)`
    pub confidence: u32,
    pub recommendations: Vec<String>,
}
