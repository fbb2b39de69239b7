use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::{
    ingestion::requests::{StatRequest, StatRequestKind},
    services::handler::RequestHandler,
    structures::{BusInfo, plan::RouteItinerary},
};

const NOT_FOUND: &str = "not found";
const UNSUPPORTED: &str = "unsupported request";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub body: StatResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponseBody {
    Bus(BusInfo),
    Stop { buses: Vec<String> },
    Route(RouteItinerary),
    Error { error_message: String },
}

impl StatResponseBody {
    fn error(message: &str) -> Self {
        StatResponseBody::Error {
            error_message: message.to_string(),
        }
    }
}

pub fn answer_stat_request(handler: &RequestHandler, request: &StatRequest) -> StatResponse {
    let body = match &request.kind {
        StatRequestKind::Bus { name } => handler.bus_info(name).map(StatResponseBody::Bus),
        StatRequestKind::Stop { name } => handler
            .stop_buses(name)
            .map(|buses| StatResponseBody::Stop { buses }),
        StatRequestKind::Route { from, to } => {
            handler.build_route(from, to).map(StatResponseBody::Route)
        }
        StatRequestKind::Unsupported => {
            warn!("Request {} has an unsupported type", request.id);
            Some(StatResponseBody::error(UNSUPPORTED))
        }
    };

    StatResponse {
        request_id: request.id,
        body: body.unwrap_or_else(|| StatResponseBody::error(NOT_FOUND)),
    }
}

pub fn answer_stat_requests(
    handler: &RequestHandler,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| answer_stat_request(handler, request))
        .collect()
}

pub fn write_responses<W: Write>(
    out: W,
    responses: &[StatResponse],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(out, responses)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::structures::{LatLng, RoutingSettings, TransportCatalogue};

    fn handler() -> RequestHandler {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", LatLng::new(0.0, 0.0)).unwrap();
        cat.add_stop("B", LatLng::new(0.0, 0.01)).unwrap();
        cat.add_stop("Lonely", LatLng::new(1.0, 1.0)).unwrap();
        cat.set_road_distance("A", "B", 1000.0).unwrap();
        cat.add_bus("10", &["A", "B", "A"], false).unwrap();
        RequestHandler::new(cat, RoutingSettings::new(2, 30.0)).unwrap()
    }

    fn request(id: i64, kind: StatRequestKind) -> StatRequest {
        StatRequest { id, kind }
    }

    #[test]
    fn stop_requests() {
        let handler = handler();
        let responses = answer_stat_requests(
            &handler,
            &[
                request(1, StatRequestKind::Stop { name: "A".to_string() }),
                request(2, StatRequestKind::Stop { name: "Lonely".to_string() }),
                request(3, StatRequestKind::Stop { name: "Ghost".to_string() }),
            ],
        );

        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!([
                {"request_id": 1, "buses": ["10"]},
                {"request_id": 2, "buses": []},
                {"request_id": 3, "error_message": "not found"}
            ])
        );
    }

    #[test]
    fn bus_request() {
        let handler = handler();
        let response = answer_stat_request(
            &handler,
            &request(7, StatRequestKind::Bus { name: "10".to_string() }),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["request_id"], 7);
        assert_eq!(value["stop_count"], 3);
        assert_eq!(value["unique_stop_count"], 2);
        assert_eq!(value["route_length"], 2000.0);
        assert!(value["curvature"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn route_requests() {
        let handler = handler();
        let found = answer_stat_request(
            &handler,
            &request(
                4,
                StatRequestKind::Route {
                    from: "A".to_string(),
                    to: "B".to_string(),
                },
            ),
        );
        let value = serde_json::to_value(&found).unwrap();
        assert_eq!(value["request_id"], 4);
        assert_eq!(value["items"][0], json!({"type": "Wait", "stop_name": "A", "time": 2.0}));
        assert_eq!(value["items"][1]["type"], "Bus");
        assert_eq!(value["items"][1]["span_count"], 1);
        assert!((value["total_time"].as_f64().unwrap() - 4.0).abs() < 1e-9);

        let unreachable = answer_stat_request(
            &handler,
            &request(
                5,
                StatRequestKind::Route {
                    from: "A".to_string(),
                    to: "Lonely".to_string(),
                },
            ),
        );
        assert_eq!(unreachable.body, StatResponseBody::error(NOT_FOUND));
    }

    #[test]
    fn unsupported_request() {
        let handler = handler();
        let response = answer_stat_request(&handler, &request(9, StatRequestKind::Unsupported));
        assert_eq!(response.body, StatResponseBody::error(UNSUPPORTED));
    }
}
