use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorResponse;
use crate::extractors::ReportRequest;
use crate::synthesis::{
    AiPredictions, Alert, AlertKind, AlertPriority, Condition, CurrentConditions, DayForecast,
    FarmingInsights, WeatherReport,
};
use crate::weather::handlers::HealthResponse;

/// OpenAPI documentation for the Farmcast API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farmcast API",
        version = "1.0.0",
        description = "Synthetic farm-weather reports: current conditions, a 14-day forecast, alerts, farming insights and an outlook summary. Values are simulated, not measured.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "weather", description = "Synthetic weather reports")
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ReportRequest,
            WeatherReport,
            CurrentConditions,
            DayForecast,
            Condition,
            Alert,
            AlertKind,
            AlertPriority,
            FarmingInsights,
            AiPredictions,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
