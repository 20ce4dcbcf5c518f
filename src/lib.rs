// Trip planner: form state, payload building and the itinerary service client

pub mod catalog;
pub mod client;
pub mod models;
pub mod payload;
pub mod planner;
pub mod telemetry;
pub mod trip_request;

// Re-export key types for convenience
pub use catalog::{budget_label, default_destinations, BudgetRange, Destination, InterestTag};
pub use client::{ApiError, ClientConfig, ClientError, HttpItineraryClient, ItineraryService};
pub use models::{BookingConfirmation, GenerateItineraryResponse, HealthStatus, StoredItinerary};
pub use payload::{ItineraryRequestPayload, PayloadError};
pub use planner::{ItineraryPlanner, PlanError, ViewState};
pub use trip_request::{Accommodation, TripRequest};
