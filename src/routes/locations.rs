use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::locations;

/// Supported locations response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationsResponse {
    /// Number of registered locations
    pub total: usize,
    /// Code → Chinese name mapping, in registration order
    #[schema(value_type = Object)]
    pub locations: serde_json::Map<String, serde_json::Value>,
    /// Registered codes, in registration order
    pub codes: Vec<String>,
}

/// List all supported location codes and their Chinese names.
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "Locations",
    responses(
        (status = 200, description = "Registered locations", body = LocationsResponse),
    )
)]
pub async fn list_locations() -> Json<LocationsResponse> {
    // serde_json::Map preserves insertion order, so the JSON object mirrors
    // the registry's registration order.
    let mapping: serde_json::Map<String, serde_json::Value> = locations::entries_in_order()
        .iter()
        .map(|(code, name)| (code.to_string(), serde_json::Value::String(name.to_string())))
        .collect();

    Json(LocationsResponse {
        total: mapping.len(),
        locations: mapping,
        codes: locations::all_codes()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_locations_counts_match() {
        let Json(body) = list_locations().await;
        assert_eq!(body.total, 22);
        assert_eq!(body.codes.len(), body.total);
        for code in &body.codes {
            assert!(body.locations.contains_key(code));
        }
    }

    #[tokio::test]
    async fn test_list_locations_known_entries() {
        let Json(body) = list_locations().await;
        assert_eq!(
            body.locations.get("kaohsiung"),
            Some(&serde_json::Value::String("高雄市".to_string()))
        );
        assert_eq!(body.codes[0], "taipei");
    }
}
