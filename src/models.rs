use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Destination;

// Response of POST /api/generate-itinerary
// `itinerary` is opaque and handed to the display layer untouched
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerateItineraryResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub itinerary: Value,
    #[serde(default)]
    pub itinerary_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<Destination>,
}

// Response of GET /api/itinerary/{id}
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoredItinerary {
    pub success: bool,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub itinerary_id: String,
    pub booking_details: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// Error body the service returns with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_response_keeps_itinerary_opaque() {
        let body = json!({
            "success": true,
            "itinerary": {"days": [{"day": 1, "unknown_field": [1, 2, 3]}], "total_cost": 25000},
            "itinerary_id": "abc123"
        });

        let response: GenerateItineraryResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(response.itinerary, body["itinerary"]);
        assert_eq!(response.itinerary_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_generate_response_requires_itinerary() {
        let result = serde_json::from_value::<GenerateItineraryResponse>(json!({"success": true}));
        assert!(result.is_err());

        let minimal: GenerateItineraryResponse =
            serde_json::from_value(json!({"itinerary": "plain text plan"})).unwrap();
        assert_eq!(minimal.success, None);
        assert_eq!(minimal.itinerary, json!("plain text plan"));
    }
}
