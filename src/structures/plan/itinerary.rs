use async_graphql::SimpleObject;
use serde::Serialize;

use crate::structures::plan::ItineraryLeg;

/// Answer to a single route query. Built per query and never stored.
#[derive(Debug, SimpleObject, Clone, PartialEq, Serialize)]
pub struct RouteItinerary {
    pub total_time: f64,
    #[serde(rename = "items")]
    pub legs: Vec<ItineraryLeg>,
}
