// Wire payload for the itinerary generation endpoint

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trip_request::TripRequest;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Invalid {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItineraryRequestPayload {
    pub destination: String,
    pub duration: i64,
    pub budget: u32,
    pub group_size: u32,
    pub interests: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

impl TryFrom<&TripRequest> for ItineraryRequestPayload {
    type Error = PayloadError;

    fn try_from(request: &TripRequest) -> Result<Self, Self::Error> {
        let start = parse_date("start_date", &request.start_date)?;
        let end = parse_date("end_date", &request.end_date)?;

        Ok(Self {
            destination: request.destination.clone(),
            duration: duration_in_days(start, end),
            budget: request.budget,
            group_size: request.group_size,
            interests: request.interests.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
        })
    }
}

/// Parses a form date. Plain `YYYY-MM-DD` values are taken as UTC midnight;
/// full RFC 3339 timestamps are accepted as well.
pub fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, PayloadError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PayloadError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

// ceil((end - start) / 1 day); negative when the range is reversed
pub fn duration_in_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}
