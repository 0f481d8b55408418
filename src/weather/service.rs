use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Instant;
use thiserror::Error;

use crate::error::HttpError;
use crate::impl_into_response;
use crate::synthesis::{self, RngSource, WeatherReport};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Location is required")]
    LocationRequired,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Report generation failed: {0}")]
    Internal(String),
}

impl HttpError for ReportError {
    // Every failure aborts the request with a 500; callers re-issue it.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::LocationRequired => Some("LOCATION_REQUIRED"),
            Self::InvalidRequest(_) => Some("INVALID_REQUEST"),
            Self::Internal(_) => Some("INTERNAL_ERROR"),
        }
    }
}

impl_into_response!(ReportError);

/// Produces synthetic weather reports, one independent generator per request
pub struct WeatherService {
    /// Master generator handing out per-request seeds when a seed is configured
    seeder: Option<Mutex<StdRng>>,
}

impl WeatherService {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seeder: seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeder.is_some()
    }

    fn request_source(&self) -> Result<RngSource<StdRng>, ReportError> {
        match &self.seeder {
            None => Ok(RngSource::from_entropy()),
            Some(seeder) => {
                let mut master = seeder
                    .lock()
                    .map_err(|_| ReportError::Internal("random source poisoned".to_string()))?;
                Ok(RngSource::seeded(master.gen()))
            }
        }
    }

    /// Generate a report dated from today's UTC date
    pub fn get_report(&self, location: Option<&str>) -> Result<WeatherReport, ReportError> {
        self.get_report_for(location, Utc::now().date_naive())
    }

    pub fn get_report_for(
        &self,
        location: Option<&str>,
        today: NaiveDate,
    ) -> Result<WeatherReport, ReportError> {
        let location = match location {
            Some(location) if !location.is_empty() => location,
            _ => return Err(ReportError::LocationRequired),
        };

        tracing::info!(location = %location, "Generating weather prediction");
        let started = Instant::now();

        let mut rng = self.request_source()?;
        let report = synthesis::synthesize(location, today, &mut rng);

        metrics::counter!("farmcast_reports_generated_total").increment(1);
        metrics::histogram!("farmcast_report_generation_seconds")
            .record(started.elapsed().as_secs_f64());

        tracing::info!(
            location = %report.location,
            alerts = report.alerts.len(),
            confidence = report.ai_predictions.confidence,
            "Weather prediction generated successfully"
        );

        Ok(report)
    }
}
