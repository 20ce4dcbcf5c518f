// Itinerary request dispatcher and the presentation state around it

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::client::{ApiError, ItineraryService};
use crate::payload::{ItineraryRequestPayload, PayloadError};
use crate::trip_request::TripRequest;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("Invalid trip request: {0}")]
    InvalidRequest(#[from] PayloadError),

    #[error("Failed to generate itinerary: {0}")]
    Dispatch(#[from] ApiError),
}

// Which of the three form panels is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Form,
    Loading,
}

#[derive(Debug, Default)]
struct PlannerState {
    show_form: bool,
    itinerary: Option<Value>,
    itinerary_id: Option<String>,
    last_error: Option<String>,
}

pub struct ItineraryPlanner {
    service: Arc<dyn ItineraryService>,
    generating: AtomicBool,
    state: Mutex<PlannerState>,
}

// Clears the generating flag however the dispatch ends
struct GeneratingGuard<'a>(&'a AtomicBool);

impl<'a> GeneratingGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ItineraryPlanner {
    pub fn new(service: Arc<dyn ItineraryService>) -> Self {
        Self {
            service,
            generating: AtomicBool::new(false),
            state: Mutex::new(PlannerState::default()),
        }
    }

    pub fn start_planning(&self) {
        self.state.lock().show_form = true;
    }

    pub fn view_state(&self) -> ViewState {
        if self.is_generating() {
            ViewState::Loading
        } else if self.state.lock().show_form {
            ViewState::Form
        } else {
            ViewState::Idle
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// The itinerary currently on display, exactly as the service returned it.
    pub fn itinerary(&self) -> Option<Value> {
        self.state.lock().itinerary.clone()
    }

    pub fn itinerary_id(&self) -> Option<String> {
        self.state.lock().itinerary_id.clone()
    }

    /// Message of the most recent failed submission, cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    /// Sends the trip request to the service and publishes the returned
    /// itinerary.
    ///
    /// Failures are logged and recorded in [`last_error`](Self::last_error);
    /// the itinerary on display is left as it was. Overlapping calls are not
    /// coordinated: each one is an independent request.
    pub async fn submit(&self, request: &TripRequest) -> Result<Value, PlanError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(self.record_failure(PlanError::Incomplete(missing)));
        }

        let payload = match ItineraryRequestPayload::try_from(request) {
            Ok(payload) => payload,
            Err(e) => return Err(self.record_failure(e.into())),
        };

        let _generating = GeneratingGuard::engage(&self.generating);
        info!(
            destination = %payload.destination,
            duration = payload.duration,
            group_size = payload.group_size,
            "Generating itinerary"
        );

        match self.service.generate_itinerary(&payload).await {
            Ok(response) => {
                let mut state = self.state.lock();
                state.itinerary = Some(response.itinerary.clone());
                state.itinerary_id = response.itinerary_id;
                state.last_error = None;
                Ok(response.itinerary)
            }
            Err(e) => Err(self.record_failure(e.into())),
        }
    }

    fn record_failure(&self, err: PlanError) -> PlanError {
        error!(error = %err, "Itinerary generation failed");
        self.state.lock().last_error = Some(err.to_string());
        err
    }
}
