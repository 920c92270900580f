//! CWA (Central Weather Administration) open-data client.
//!
//! Fetches the 36-hour general forecast (dataset F-C0032-001) and reshapes
//! its element-oriented time series into flat per-period records.
//! See: https://opendata.cwa.gov.tw/dist/opendata-swagger.html

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

const CWA_BASE_URL: &str = "https://opendata.cwa.gov.tw";
/// 36-hour general forecast for all of Taiwan's administrative regions.
const FORECAST_DATASET: &str = "F-C0032-001";

/// Client for the CWA open-data API.
#[derive(Debug, Clone)]
pub struct CwaClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

/// One forecast window with its descriptive fields.
///
/// Every field defaults to an empty string; upstream elements that are
/// missing or misaligned simply leave their slot blank.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Window start, as returned upstream (e.g. "2026-08-26 18:00:00")
    pub start_time: String,
    /// Window end
    pub end_time: String,
    /// Weather condition text (Wx), verbatim Chinese
    pub weather: String,
    /// Precipitation probability (PoP), percent-suffixed
    pub rain: String,
    /// Minimum temperature (MinT), degree-suffixed
    pub min_temp: String,
    /// Maximum temperature (MaxT), degree-suffixed
    pub max_temp: String,
    /// Comfort index text (CI), verbatim
    pub comfort: String,
    /// Wind speed text (WS), verbatim
    pub wind: String,
}

/// Flattened 36-hour forecast for one region.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Region name as returned upstream (Chinese)
    pub city: String,
    /// Dataset description from the response envelope; a coarse metadata
    /// field reused for display, not a per-period timestamp
    pub update_time: String,
    /// Forecast windows, ordered by increasing start time as returned upstream
    pub forecasts: Vec<ForecastPeriod>,
}

// --- CWA JSON response types ---

#[derive(Debug, Deserialize)]
struct CwaResponse {
    records: CwaRecords,
}

#[derive(Debug, Deserialize)]
struct CwaRecords {
    #[serde(rename = "datasetDescription", default)]
    dataset_description: String,
    #[serde(default)]
    location: Vec<CwaLocation>,
}

#[derive(Debug, Deserialize)]
struct CwaLocation {
    #[serde(rename = "locationName")]
    location_name: String,
    #[serde(rename = "weatherElement", default)]
    weather_element: Vec<CwaElement>,
}

#[derive(Debug, Deserialize)]
struct CwaElement {
    #[serde(rename = "elementName")]
    element_name: String,
    #[serde(default)]
    time: Vec<CwaTime>,
}

#[derive(Debug, Deserialize)]
struct CwaTime {
    #[serde(rename = "startTime")]
    start_time: String,
    #[serde(rename = "endTime")]
    end_time: String,
    parameter: CwaParameter,
}

#[derive(Debug, Deserialize)]
struct CwaParameter {
    #[serde(rename = "parameterName")]
    parameter_name: String,
}

impl CwaClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, CWA_BASE_URL)
    }

    /// Construct a client against a non-default base URL (mock servers in tests).
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and normalize the 36-hour forecast for `location`.
    ///
    /// `location` must be a canonical Chinese region name (e.g. "高雄市");
    /// code resolution happens at the route layer, not here.
    pub async fn fetch_forecast(&self, location: &str) -> Result<WeatherReport, AppError> {
        // Fail before any network I/O when no key is configured.
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let url = format!(
            "{}/api/v1/rest/datastore/{}",
            self.base_url, FORECAST_DATASET
        );

        let response = self
            .client
            .get(&url)
            .query(&[("Authorization", api_key), ("locationName", location)])
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                message: format!("CWA request failed: {}", e),
                status: None,
                detail: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Keep the upstream body for diagnostics; it is JSON for most
            // CWA errors (bad key, malformed query) but not guaranteed.
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .or_else(|| (!body.is_empty()).then(|| serde_json::Value::String(body)));
            return Err(AppError::Upstream {
                message: format!("CWA returned HTTP {}", status),
                status: Some(status.as_u16()),
                detail,
            });
        }

        let raw_json: serde_json::Value =
            response.json().await.map_err(|e| AppError::Upstream {
                message: format!("CWA JSON parse error: {}", e),
                status: Some(status.as_u16()),
                detail: None,
            })?;

        normalize_forecast(&raw_json, location)
    }
}

/// Reshape a raw CWA response into a `WeatherReport` for `requested`.
///
/// Pure function (no I/O). The first location record's first weather
/// element supplies the period skeleton (one period per time entry, with
/// that element's start/end times); every element then routes its value at
/// index `i` into the matching field by element name. Unrecognized element
/// names are ignored so upstream can add fields without breaking us, and
/// elements shorter than the skeleton leave their fields blank rather than
/// erroring (the same-cardinality alignment is an upstream contract we
/// tolerate, not assert).
pub fn normalize_forecast(
    raw_json: &serde_json::Value,
    requested: &str,
) -> Result<WeatherReport, AppError> {
    let cwa_response: CwaResponse =
        serde_json::from_value(raw_json.clone()).map_err(|e| AppError::Upstream {
            message: format!("CWA response structure error: {}", e),
            status: None,
            detail: None,
        })?;

    let records = cwa_response.records;
    let Some(record) = records.location.into_iter().next() else {
        return Err(AppError::LocationNotFound(requested.to_string()));
    };

    let mut forecasts: Vec<ForecastPeriod> = record
        .weather_element
        .first()
        .map(|skeleton| {
            skeleton
                .time
                .iter()
                .map(|t| ForecastPeriod {
                    start_time: t.start_time.clone(),
                    end_time: t.end_time.clone(),
                    ..Default::default()
                })
                .collect()
        })
        .unwrap_or_default();

    for element in &record.weather_element {
        for (i, period) in forecasts.iter_mut().enumerate() {
            let Some(value) = element.time.get(i).map(|t| &t.parameter.parameter_name) else {
                continue;
            };
            match element.element_name.as_str() {
                "Wx" => period.weather = value.clone(),
                "PoP" => period.rain = format!("{}%", value),
                "MinT" => period.min_temp = format!("{}°C", value),
                "MaxT" => period.max_temp = format!("{}°C", value),
                "CI" => period.comfort = value.clone(),
                "WS" => period.wind = value.clone(),
                _ => {}
            }
        }
    }

    Ok(WeatherReport {
        city: record.location_name,
        update_time: records.dataset_description,
        forecasts,
    })
}
