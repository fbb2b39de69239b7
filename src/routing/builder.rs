use std::time::Instant;

use tracing::{debug, info};

use crate::structures::{
    Bus, BusID, Edge, EdgeData, RideEdgeData, RouteGraph, RoutingSettings, SettingsError, StopID,
    TransportCatalogue, VertexID, WaitEdgeData,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid routing settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("bus '{bus}' has no road distance between '{from}' and '{to}'")]
    MissingDistance {
        bus: String,
        from: String,
        to: String,
    },
}

/// Maps stops to their pair of graph vertices. Stops are laid out in
/// alphabetical order: the stop at position `i` arrives at vertex `2i` and
/// departs from vertex `2i + 1`.
#[derive(Debug, Clone)]
pub struct StopIndex {
    order: Vec<StopID>,
    positions: Vec<usize>,
}

impl StopIndex {
    pub fn new(catalogue: &TransportCatalogue) -> StopIndex {
        let stops = catalogue.stops();
        let mut order = (0..stops.len() as u32).map(StopID).collect::<Vec<_>>();
        order.sort_by(|a, b| stops[a.0 as usize].name.cmp(&stops[b.0 as usize].name));

        let mut positions = vec![0; order.len()];
        for (position, stop) in order.iter().enumerate() {
            positions[stop.0 as usize] = position;
        }

        StopIndex { order, positions }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    pub fn arrival(&self, stop: StopID) -> VertexID {
        VertexID(self.positions[stop.0 as usize] * 2)
    }

    pub fn departure(&self, stop: StopID) -> VertexID {
        VertexID(self.positions[stop.0 as usize] * 2 + 1)
    }
}

/// Graph plus the description of each of its edges.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: RouteGraph,
    pub edges: Vec<EdgeData>,
    pub stop_index: StopIndex,
}

pub struct GraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        GraphBuilder {
            catalogue,
            settings,
        }
    }

    pub fn build(self) -> Result<BuiltGraph, BuildError> {
        self.settings.validate()?;
        let before = Instant::now();

        let stop_index = StopIndex::new(self.catalogue);
        let mut built = BuiltGraph {
            graph: RouteGraph::new(stop_index.len() * 2),
            edges: Vec::new(),
            stop_index,
        };

        let wait_time = self.settings.bus_wait_time as f64;
        for &stop in &built.stop_index.order {
            built.graph.add_edge(Edge {
                from: built.stop_index.arrival(stop),
                to: built.stop_index.departure(stop),
                weight: wait_time,
            });
            built.edges.push(EdgeData::Wait(WaitEdgeData {
                stop,
                time: wait_time,
            }));
        }

        for (i, bus) in self.catalogue.buses().iter().enumerate() {
            let id = BusID(i as u32);
            let edges_before = built.edges.len();

            if bus.stops.is_empty() {
                continue;
            }

            if bus.is_roundtrip {
                self.add_ride_edges(&mut built, id, bus, &bus.stops)?;
            } else {
                // A ride never crosses the turnaround stop.
                let turnaround = bus.turnaround();
                self.add_ride_edges(&mut built, id, bus, &bus.stops[..=turnaround])?;
                self.add_ride_edges(&mut built, id, bus, &bus.stops[turnaround..])?;
            }

            debug!(
                "Bus '{}' added {} ride edges",
                bus.name,
                built.edges.len() - edges_before
            );
        }

        info!(
            "Route graph built in {}ms: {} vertices, {} edges",
            before.elapsed().as_millis(),
            built.graph.vertex_count(),
            built.graph.edge_count()
        );

        Ok(built)
    }

    /// Adds one edge for every ordered pair of stops in `segment`, weighted by
    /// the road distance accumulated between them.
    fn add_ride_edges(
        &self,
        built: &mut BuiltGraph,
        id: BusID,
        bus: &Bus,
        segment: &[StopID],
    ) -> Result<(), BuildError> {
        let metres_per_minute = self.settings.metres_per_minute();

        for i in 0..segment.len() {
            let mut distance = 0.0;
            for j in i + 1..segment.len() {
                distance += self.distance(bus, segment[j - 1], segment[j])?;
                let time = distance / metres_per_minute;

                built.graph.add_edge(Edge {
                    from: built.stop_index.departure(segment[i]),
                    to: built.stop_index.arrival(segment[j]),
                    weight: time,
                });
                built.edges.push(EdgeData::Ride(RideEdgeData {
                    bus: id,
                    span_count: j - i,
                    time,
                }));
            }
        }

        Ok(())
    }

    fn distance(&self, bus: &Bus, from: StopID, to: StopID) -> Result<f64, BuildError> {
        self.catalogue
            .road_distance(from, to)
            .ok_or_else(|| BuildError::MissingDistance {
                bus: bus.name.clone(),
                from: self.stop_name(from),
                to: self.stop_name(to),
            })
    }

    fn stop_name(&self, id: StopID) -> String {
        self.catalogue
            .stop(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
