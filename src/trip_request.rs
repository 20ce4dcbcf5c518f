// Form state for a single trip planning session
// Accepts the form's camelCase JSON; the wire payload is built separately in `payload`

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{budget_label, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP};

pub const DEFAULT_BUDGET: u32 = 25_000;
pub const DEFAULT_GROUP_SIZE: u32 = 2;

// Accommodation tier - collected by the form, not forwarded to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accommodation {
    Budget,
    #[default]
    MidRange,
    Luxury,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "slider_lower_bound")]
    pub budget: u32,
    pub group_size: u32,
    pub interests: Vec<String>,
    pub accommodation: Accommodation,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            budget: DEFAULT_BUDGET,
            group_size: DEFAULT_GROUP_SIZE,
            interests: Vec::new(),
            accommodation: Accommodation::default(),
        }
    }
}

impl TripRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) {
        self.start_date = date.into();
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) {
        self.end_date = date.into();
    }

    /// Sets the budget the way the slider would: clamped to its bounds and
    /// snapped to the nearest step.
    pub fn set_budget(&mut self, budget: u32) {
        let clamped = budget.clamp(BUDGET_MIN, BUDGET_MAX);
        let steps = (clamped - BUDGET_MIN + BUDGET_STEP / 2) / BUDGET_STEP;
        self.budget = (BUDGET_MIN + steps * BUDGET_STEP).min(BUDGET_MAX);
    }

    pub fn set_group_size(&mut self, group_size: u32) {
        self.group_size = group_size;
    }

    pub fn set_accommodation(&mut self, accommodation: Accommodation) {
        self.accommodation = accommodation;
    }

    // Removes the tag if selected, appends it otherwise
    pub fn toggle_interest(&mut self, interest_id: &str) {
        if let Some(pos) = self.interests.iter().position(|id| id == interest_id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest_id.to_string());
        }
    }

    pub fn has_interest(&self, interest_id: &str) -> bool {
        self.interests.iter().any(|id| id == interest_id)
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("destination", &self.destination),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn budget_label(&self) -> String {
        budget_label(self.budget)
    }
}

// The range slider reports `[lower, upper?]`; a bare number is accepted too
fn slider_lower_bound<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SliderValue {
        Single(u32),
        Range(Vec<u32>),
    }

    match SliderValue::deserialize(deserializer)? {
        SliderValue::Single(value) => Ok(value),
        SliderValue::Range(values) => values
            .first()
            .copied()
            .ok_or_else(|| serde::de::Error::custom("budget range is empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn complete_request() -> TripRequest {
        let mut request = TripRequest::new();
        request.set_destination("Jaipur");
        request.set_start_date("2024-01-01");
        request.set_end_date("2024-01-03");
        request
    }

    #[test]
    fn test_defaults_match_form() {
        let request = TripRequest::new();
        assert_eq!(request.budget, 25_000);
        assert_eq!(request.group_size, 2);
        assert!(request.interests.is_empty());
        assert_eq!(request.accommodation, Accommodation::MidRange);
        assert!(!request.can_submit());
    }

    #[test_case("destination"; "missing destination")]
    #[test_case("start_date"; "missing start date")]
    #[test_case("end_date"; "missing end date")]
    fn test_submission_blocked_when_required_field_empty(field: &str) {
        let mut request = complete_request();
        match field {
            "destination" => request.set_destination(""),
            "start_date" => request.set_start_date(""),
            _ => request.set_end_date(""),
        }

        assert!(!request.can_submit());
        assert_eq!(request.missing_fields(), vec![field]);
    }

    #[test]
    fn test_submission_permitted_when_complete() {
        let request = complete_request();
        assert!(request.can_submit());
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn test_toggle_interest_twice_restores_set() {
        let mut request = complete_request();
        request.toggle_interest("heritage");
        request.toggle_interest("food");
        let before = request.interests.clone();

        request.toggle_interest("adventure");
        assert!(request.has_interest("adventure"));
        request.toggle_interest("adventure");
        assert_eq!(request.interests, before);

        request.toggle_interest("heritage");
        assert_eq!(request.interests, vec!["food".to_string()]);
        request.toggle_interest("heritage");
        assert!(request.has_interest("heritage"));
        assert_eq!(request.interests.len(), 2);
    }

    #[test_case(0, 5_000; "clamped to minimum")]
    #[test_case(27_400, 25_000; "snapped down")]
    #[test_case(27_500, 30_000; "snapped up")]
    #[test_case(1_000_000, 100_000; "clamped to maximum")]
    fn test_set_budget_follows_slider(input: u32, expected: u32) {
        let mut request = TripRequest::new();
        request.set_budget(input);
        assert_eq!(request.budget, expected);
    }

    #[test]
    fn test_deserialize_form_json() {
        let json = r#"{
            "destination": "Goa",
            "startDate": "2025-03-10",
            "endDate": "2025-03-14",
            "budget": [40000],
            "groupSize": 4,
            "interests": ["beaches", "food"],
            "accommodation": "luxury"
        }"#;

        let request: TripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.destination, "Goa");
        assert_eq!(request.start_date, "2025-03-10");
        assert_eq!(request.budget, 40_000);
        assert_eq!(request.group_size, 4);
        assert_eq!(request.accommodation, Accommodation::Luxury);
        assert_eq!(request.budget_label(), "Premium (₹35K - ₹70K)");
    }

    #[test]
    fn test_deserialize_partial_form_uses_defaults() {
        let request: TripRequest = serde_json::from_str(r#"{"destination": "Agra"}"#).unwrap();
        assert_eq!(request.budget, DEFAULT_BUDGET);
        assert_eq!(request.group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(request.missing_fields(), vec!["start_date", "end_date"]);
    }

    #[test]
    fn test_empty_budget_range_rejected() {
        let result = serde_json::from_str::<TripRequest>(r#"{"budget": []}"#);
        assert!(result.is_err());
    }
}
