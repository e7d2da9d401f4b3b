use axum::{extract::Query, response::IntoResponse, Json};
use serde::Deserialize;

use crate::catalog;
use crate::error::AppError;
use crate::models::{LookupRequest, LookupResponse};
use crate::services::metrics::record_lookup;

#[derive(Debug, Deserialize)]
pub struct OptionsParams {
    #[serde(default, rename = "getOptions")]
    pub get_options: Option<String>,
}

/// `GET /api/usecases?getOptions=true` — dropdown options for the UI.
pub async fn get_options(
    Query(params): Query<OptionsParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.get_options.as_deref() != Some("true") {
        return Err(AppError::BadRequest(
            "Use ?getOptions=true to fetch options, or POST a lookup".to_string(),
        ));
    }

    Ok(Json(catalog::options()))
}

/// `POST /api/usecases` — use cases for a country/industry/function pick.
///
/// Missing fields are treated as absent, not as errors; they simply fall
/// through to the not-found sentinel. When the country has insights, a
/// header line plus each insight string is appended after the use cases,
/// onto a per-request copy, never the catalog's own list.
pub async fn recommend_usecases(Json(request): Json<LookupRequest>) -> impl IntoResponse {
    let industry = request.industry.as_deref().unwrap_or_default();
    let business_function = request.business_function.as_deref().unwrap_or_default();

    let mut usecases = catalog::lookup(industry, business_function);
    record_lookup(
        industry,
        business_function,
        usecases.first().map(String::as_str) != Some(catalog::NO_MATCH_MESSAGE),
    );

    if let Some(country) = request.country.as_deref() {
        let insights = catalog::insights_for(country);
        if !insights.is_empty() {
            usecases.push(format!("Country-Specific Insights for {}:", country));
            usecases.extend(insights.iter().map(|insight| insight.to_string()));
        }
    }

    tracing::debug!(
        industry = %industry,
        business_function = %business_function,
        results = usecases.len(),
        "Served use-case lookup"
    );

    Json(LookupResponse { usecases })
}
