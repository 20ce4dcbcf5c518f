// Command-line front end: plan_trip <destination> <start> <end> [budget] [group_size] [interest...]

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use trip_planner::catalog::{interest_tag, GROUP_SIZE_OPTIONS};
use trip_planner::telemetry::init_tracing;
use trip_planner::{ClientConfig, HttpItineraryClient, ItineraryPlanner, TripRequest};

const USAGE: &str =
    "usage: plan_trip <destination> <start-date> <end-date> [budget] [group-size] [interest...]";

fn parse_args(args: &[String]) -> Result<TripRequest> {
    if args.len() < 3 {
        bail!(USAGE);
    }

    let mut request = TripRequest::new();
    request.set_destination(args[0].as_str());
    request.set_start_date(args[1].as_str());
    request.set_end_date(args[2].as_str());

    if let Some(budget) = args.get(3) {
        request.set_budget(budget.parse().with_context(|| format!("invalid budget: {}", budget))?);
    }
    if let Some(size) = args.get(4) {
        let size: u32 = size.parse().with_context(|| format!("invalid group size: {}", size))?;
        if !GROUP_SIZE_OPTIONS.contains(&size) {
            warn!(size, "Group size is not one of the form presets");
        }
        request.set_group_size(size);
    }
    for interest in args.iter().skip(5) {
        if interest_tag(interest).is_none() {
            warn!(%interest, "Unknown interest tag, forwarding anyway");
        }
        request.toggle_interest(interest);
    }

    Ok(request)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = parse_args(&args)?;

    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, "Using itinerary service");

    let client = HttpItineraryClient::new(config)?;
    let planner = ItineraryPlanner::new(Arc::new(client));
    planner.start_planning();

    info!(budget = %request.budget_label(), "Submitting trip request");
    let itinerary = planner.submit(&request).await?;

    println!("{}", serde_json::to_string_pretty(&itinerary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_full_arguments() {
        let request = parse_args(&args(&[
            "Goa", "2025-12-20", "2025-12-27", "42000", "4", "beaches", "food",
        ]))
        .unwrap();

        assert_eq!(request.destination, "Goa");
        assert_eq!(request.budget, 40_000);
        assert_eq!(request.group_size, 4);
        assert_eq!(request.interests, vec!["beaches", "food"]);
        assert!(request.can_submit());
    }

    #[test]
    fn test_parse_rejects_missing_dates() {
        assert!(parse_args(&args(&["Goa", "2025-12-20"])).is_err());
        assert!(parse_args(&args(&["Goa", "2025-12-20", "2025-12-27", "lots"])).is_err());
    }
}
