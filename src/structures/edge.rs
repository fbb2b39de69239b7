use crate::structures::{BusID, StopID};

/// What a graph edge stands for. Kept in a table parallel to the graph's
/// edges so a path of edge ids can be turned back into an itinerary.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeData {
    Wait(WaitEdgeData),
    Ride(RideEdgeData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitEdgeData {
    pub stop: StopID,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RideEdgeData {
    pub bus: BusID,
    pub span_count: usize,
    pub time: f64,
}

impl EdgeData {
    pub fn time(&self) -> f64 {
        match self {
            EdgeData::Wait(e) => e.time,
            EdgeData::Ride(e) => e.time,
        }
    }
}
