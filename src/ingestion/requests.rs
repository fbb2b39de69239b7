use std::{collections::BTreeMap, io::Read};

use serde::Deserialize;

use crate::structures::RoutingSettings;

/// Request document read by both `make_base` and `process_requests`.
/// Keys the tool does not use, such as `render_settings`, are ignored.
#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    pub serialization_settings: SerializationSettings,
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SerializationSettings {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// A bus as given by the data source: shuttle lines list only the outbound
/// stops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub kind: StatRequestKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequestKind {
    Stop { name: String },
    Bus { name: String },
    Route { from: String, to: String },
    #[serde(other)]
    Unsupported,
}

impl RequestDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
