use std::sync::Arc;

use tracing::debug;

use crate::{
    routing::{BuildError, BuiltGraph, GraphBuilder, StopIndex, find_path},
    structures::{
        EdgeData, EdgeID, RouteGraph, RoutingSettings, TransportCatalogue,
        plan::{ItineraryLeg, RideLeg, RouteItinerary, WaitLeg},
    },
};

/// Answers point-to-point fastest-route queries over a catalogue.
///
/// The graph is built once in [`TransportRouter::new`] and only read
/// afterwards; queries take `&self` and may run from many threads at once.
pub struct TransportRouter {
    catalogue: Arc<TransportCatalogue>,
    graph: RouteGraph,
    edges: Vec<EdgeData>,
    stop_index: StopIndex,
}

impl TransportRouter {
    pub fn new(
        catalogue: Arc<TransportCatalogue>,
        settings: RoutingSettings,
    ) -> Result<TransportRouter, BuildError> {
        let BuiltGraph {
            graph,
            edges,
            stop_index,
        } = GraphBuilder::new(&catalogue, settings).build()?;

        Ok(TransportRouter {
            catalogue,
            graph,
            edges,
            stop_index,
        })
    }

    /// Fastest itinerary between two stops. `None` if either stop is unknown
    /// or no bus connects them.
    pub fn build_route(&self, from: &str, to: &str) -> Option<RouteItinerary> {
        let (Some(from_id), Some(to_id)) =
            (self.catalogue.stop_id(from), self.catalogue.stop_id(to))
        else {
            debug!("Route '{from}' -> '{to}': unknown stop");
            return None;
        };

        // Start on arrival so the first wait is paid; end on arrival so the
        // last one is not.
        let path = match find_path(
            &self.graph,
            self.stop_index.arrival(from_id),
            self.stop_index.arrival(to_id),
        ) {
            Some(path) => path,
            None => {
                debug!("Route '{from}' -> '{to}': unreachable");
                return None;
            }
        };

        let legs = path
            .edges
            .iter()
            .map(|&id| self.leg(id))
            .collect::<Option<Vec<_>>>()?;

        debug!(
            "Route '{from}' -> '{to}': {} legs, {:.2} minutes",
            legs.len(),
            path.weight
        );

        Some(RouteItinerary {
            total_time: path.weight,
            legs,
        })
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn edge_data(&self, id: EdgeID) -> Option<&EdgeData> {
        self.edges.get(id.0)
    }

    fn leg(&self, id: EdgeID) -> Option<ItineraryLeg> {
        Some(match self.edge_data(id)? {
            EdgeData::Wait(wait) => ItineraryLeg::Wait(WaitLeg {
                stop_name: self.catalogue.stop(wait.stop)?.name.clone(),
                time: wait.time,
            }),
            EdgeData::Ride(ride) => ItineraryLeg::Ride(RideLeg {
                bus_name: self.catalogue.bus(ride.bus)?.name.clone(),
                span_count: ride.span_count,
                time: ride.time,
            }),
        })
    }
}
