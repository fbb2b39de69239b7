use async_graphql::{Interface, SimpleObject};
use serde::Serialize;

#[derive(Debug, Interface, Clone, PartialEq, Serialize)]
#[graphql(field(name = "time", ty = "&f64"))]
#[serde(tag = "type")]
pub enum ItineraryLeg {
    Wait(WaitLeg),
    #[serde(rename = "Bus")]
    Ride(RideLeg),
}

/// Time spent at a stop waiting for a bus.
#[derive(Debug, SimpleObject, Clone, PartialEq, Serialize)]
pub struct WaitLeg {
    pub stop_name: String,
    pub time: f64,
}

/// Time spent aboard one bus without getting off.
#[derive(Debug, SimpleObject, Clone, PartialEq, Serialize)]
pub struct RideLeg {
    #[serde(rename = "bus")]
    pub bus_name: String,
    pub span_count: usize,
    pub time: f64,
}

impl ItineraryLeg {
    pub fn duration(&self) -> f64 {
        match self {
            ItineraryLeg::Wait(leg) => leg.time,
            ItineraryLeg::Ride(leg) => leg.time,
        }
    }
}
