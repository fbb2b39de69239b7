use std::collections::{BTreeSet, HashMap};

use async_graphql::SimpleObject;
use serde::Serialize;

use crate::structures::{Bus, BusID, LatLng, Stop, StopID};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    #[error("stop '{0}' is already registered")]
    DuplicateStop(String),

    #[error("bus '{0}' is already registered")]
    DuplicateBus(String),

    #[error("unknown stop '{0}'")]
    UnknownStop(String),

    #[error("road distance from '{from}' to '{to}' must be a non-negative number, got {meters}")]
    InvalidDistance {
        from: String,
        to: String,
        meters: f64,
    },

    #[error("too many {0} for 32-bit identifiers")]
    CapacityExceeded(&'static str),

    #[error("bus '{bus}' has no road distance between '{from}' and '{to}'")]
    MissingDistance {
        bus: String,
        from: String,
        to: String,
    },
}

/// Aggregated statistics of a single bus line.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct BusInfo {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    pub curvature: f64,
}

/// Stops, buses and road distances of one transit network.
///
/// Stops and buses are kept in arenas and referenced by index, so a
/// `StopID` or `BusID` stays valid for the lifetime of the catalogue.
#[derive(Debug, Default, PartialEq)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_ids: HashMap<String, StopID>,
    bus_ids: HashMap<String, BusID>,
    stop_to_buses: Vec<BTreeSet<BusID>>,
    road_distances: HashMap<(StopID, StopID), f64>,
}

impl TransportCatalogue {
    pub fn new() -> TransportCatalogue {
        TransportCatalogue::default()
    }

    pub fn add_stop(&mut self, name: &str, lat_lng: LatLng) -> Result<StopID, CatalogueError> {
        if self.stop_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }

        let id = StopID(
            u32::try_from(self.stops.len())
                .map_err(|_| CatalogueError::CapacityExceeded("stops"))?,
        );
        self.stops.push(Stop {
            name: name.to_string(),
            lat_lng,
        });
        self.stop_to_buses.push(BTreeSet::new());
        self.stop_ids.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn set_road_distance(
        &mut self,
        from: &str,
        to: &str,
        meters: f64,
    ) -> Result<(), CatalogueError> {
        let from = self.resolve_stop(from)?;
        let to = self.resolve_stop(to)?;
        self.set_road_distance_by_id(from, to, meters)
    }

    /// Records a distance between two known stops. Negative, infinite and
    /// NaN distances are rejected, so every graph weight stays non-negative.
    pub fn set_road_distance_by_id(
        &mut self,
        from: StopID,
        to: StopID,
        meters: f64,
    ) -> Result<(), CatalogueError> {
        let from_stop = self
            .stop(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_stop = self
            .stop(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;

        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from_stop.name.clone(),
                to: to_stop.name.clone(),
                meters,
            });
        }

        self.road_distances.insert((from, to), meters);
        Ok(())
    }

    /// Distance from `from` to `to`, falling back to the opposite direction
    /// when only that one was recorded.
    pub fn road_distance(&self, from: StopID, to: StopID) -> Option<f64> {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
    }

    pub fn get_road_distance(&self, from: &str, to: &str) -> Option<f64> {
        self.road_distance(*self.stop_ids.get(from)?, *self.stop_ids.get(to)?)
    }

    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusID, CatalogueError> {
        if self.bus_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }

        let stops = stop_names
            .iter()
            .map(|s| self.resolve_stop(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusID(
            u32::try_from(self.buses.len())
                .map_err(|_| CatalogueError::CapacityExceeded("buses"))?,
        );
        for stop in &stops {
            self.stop_to_buses[stop.0 as usize].insert(id);
        }
        self.buses.push(Bus {
            name: name.to_string(),
            stops,
            is_roundtrip,
        });
        self.bus_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Checks that every pair of consecutive stops on every bus has a known
    /// road distance in at least one direction.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        for bus in &self.buses {
            for pair in bus.stops.windows(2) {
                if self.road_distance(pair[0], pair[1]).is_none() {
                    return Err(CatalogueError::MissingDistance {
                        bus: bus.name.clone(),
                        from: self.stops[pair[0].0 as usize].name.clone(),
                        to: self.stops[pair[1].0 as usize].name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn stop(&self, id: StopID) -> Option<&Stop> {
        self.stops.get(id.0 as usize)
    }

    pub fn bus(&self, id: BusID) -> Option<&Bus> {
        self.buses.get(id.0 as usize)
    }

    pub fn stop_id(&self, name: &str) -> Option<StopID> {
        self.stop_ids.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusID> {
        self.bus_ids.get(name).copied()
    }

    /// Recorded directed distances, without the reverse-direction fallback.
    pub fn distances(&self) -> impl Iterator<Item = (StopID, StopID, f64)> + '_ {
        self.road_distances
            .iter()
            .map(|(&(from, to), &meters)| (from, to, meters))
    }

    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        let bus = self.bus(self.bus_id(name)?)?;

        let unique_stop_count = bus.stops.iter().collect::<BTreeSet<_>>().len();
        let mut route_length = 0.0;
        let mut geo_length = 0.0;
        for pair in bus.stops.windows(2) {
            route_length += self.road_distance(pair[0], pair[1])?;
            geo_length += self.stops[pair[0].0 as usize]
                .lat_lng
                .dist(self.stops[pair[1].0 as usize].lat_lng);
        }

        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            1.0
        };

        Some(BusInfo {
            stop_count: bus.stops.len(),
            unique_stop_count,
            route_length,
            curvature,
        })
    }

    /// Names of the buses visiting a stop, sorted. `None` if the stop is unknown.
    pub fn buses_by_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.stop_id(name)?;
        let mut names = self.stop_to_buses[id.0 as usize]
            .iter()
            .map(|bus| self.buses[bus.0 as usize].name.as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        Some(names)
    }

    fn resolve_stop(&self, name: &str) -> Result<StopID, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> TransportCatalogue {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("X", LatLng::new(55.0, 37.0)).unwrap();
        cat.add_stop("Y", LatLng::new(55.01, 37.0)).unwrap();
        cat.add_stop("Z", LatLng::new(55.02, 37.0)).unwrap();
        cat
    }

    #[test]
    fn distance_falls_back_to_reverse_direction() {
        let mut cat = catalogue();
        cat.set_road_distance("X", "Y", 1000.0).unwrap();

        assert_eq!(cat.get_road_distance("X", "Y"), Some(1000.0));
        assert_eq!(cat.get_road_distance("Y", "X"), Some(1000.0));

        cat.set_road_distance("Y", "X", 1200.0).unwrap();
        assert_eq!(cat.get_road_distance("Y", "X"), Some(1200.0));
        assert_eq!(cat.get_road_distance("X", "Y"), Some(1000.0));
    }

    #[test]
    fn distance_overwrites_same_pair() {
        let mut cat = catalogue();
        cat.set_road_distance("X", "Y", 1000.0).unwrap();
        cat.set_road_distance("X", "Y", 900.0).unwrap();
        assert_eq!(cat.get_road_distance("X", "Y"), Some(900.0));
        assert_eq!(cat.distances().count(), 1);
    }

    #[test]
    fn unknown_distance() {
        let cat = catalogue();
        assert_eq!(cat.get_road_distance("X", "Z"), None);
        assert_eq!(cat.get_road_distance("X", "Nowhere"), None);
    }

    #[test]
    fn negative_and_non_finite_distances_are_rejected() {
        let mut cat = catalogue();
        assert_eq!(
            cat.set_road_distance("X", "Y", -1000.0),
            Err(CatalogueError::InvalidDistance {
                from: "X".to_string(),
                to: "Y".to_string(),
                meters: -1000.0,
            })
        );
        assert!(cat.set_road_distance("X", "Y", f64::INFINITY).is_err());
        assert!(cat.set_road_distance("Y", "X", f64::NAN).is_err());
        assert_eq!(cat.get_road_distance("X", "Y"), None);
        assert_eq!(cat.distances().count(), 0);

        cat.set_road_distance("X", "Y", 0.0).unwrap();
        assert_eq!(cat.get_road_distance("Y", "X"), Some(0.0));
    }

    #[test]
    fn distance_by_unknown_id_is_rejected() {
        let mut cat = catalogue();
        assert_eq!(
            cat.set_road_distance_by_id(StopID(0), StopID(9), 10.0),
            Err(CatalogueError::UnknownStop("9".to_string()))
        );
    }

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let mut cat = catalogue();
        assert_eq!(cat.stop_id("Z"), Some(StopID(2)));
        assert!(cat.add_stop("X", LatLng::new(0.0, 0.0)).is_err());
        assert_eq!(cat.add_stop("W", LatLng::new(0.0, 0.0)), Ok(StopID(3)));

        assert_eq!(cat.add_bus("1", &["X", "W"], false), Ok(BusID(0)));
        assert!(cat.add_bus("1", &["X"], false).is_err());
        assert_eq!(cat.add_bus("2", &["Y"], true), Ok(BusID(1)));
    }

    #[test]
    fn duplicate_stop_is_rejected() {
        let mut cat = catalogue();
        assert_eq!(
            cat.add_stop("X", LatLng::new(0.0, 0.0)),
            Err(CatalogueError::DuplicateStop("X".to_string()))
        );
        assert_eq!(cat.stop_count(), 3);
        assert_eq!(cat.stop(cat.stop_id("X").unwrap()).unwrap().lat_lng.latitude, 55.0);
    }

    #[test]
    fn bus_with_unknown_stop_is_rejected() {
        let mut cat = catalogue();
        assert_eq!(
            cat.add_bus("1", &["X", "Nowhere"], true),
            Err(CatalogueError::UnknownStop("Nowhere".to_string()))
        );
        assert!(cat.buses().is_empty());
        assert_eq!(cat.buses_by_stop("X"), Some(vec![]));
    }

    #[test]
    fn distance_with_unknown_stop_is_rejected() {
        let mut cat = catalogue();
        assert_eq!(
            cat.set_road_distance("Nowhere", "X", 10.0),
            Err(CatalogueError::UnknownStop("Nowhere".to_string()))
        );
    }

    #[test]
    fn duplicate_bus_is_rejected() {
        let mut cat = catalogue();
        cat.add_bus("1", &["X", "Y"], false).unwrap();
        assert_eq!(
            cat.add_bus("1", &["Y", "Z"], false),
            Err(CatalogueError::DuplicateBus("1".to_string()))
        );
    }

    #[test]
    fn buses_by_stop_are_sorted_and_deduplicated() {
        let mut cat = catalogue();
        cat.add_bus("b", &["X", "Y", "X"], true).unwrap();
        cat.add_bus("a", &["Y", "Z", "Y"], false).unwrap();

        assert_eq!(cat.buses_by_stop("Y"), Some(vec!["a", "b"]));
        assert_eq!(cat.buses_by_stop("X"), Some(vec!["b"]));
        assert_eq!(cat.buses_by_stop("Nowhere"), None);
    }

    #[test]
    fn validate_reports_missing_pair() {
        let mut cat = catalogue();
        cat.set_road_distance("X", "Y", 1000.0).unwrap();
        cat.add_bus("7", &["X", "Y", "Z", "Y", "X"], false).unwrap();

        assert_eq!(
            cat.validate(),
            Err(CatalogueError::MissingDistance {
                bus: "7".to_string(),
                from: "Y".to_string(),
                to: "Z".to_string(),
            })
        );

        cat.set_road_distance("Z", "Y", 500.0).unwrap();
        assert_eq!(cat.validate(), Ok(()));
    }

    #[test]
    fn bus_info_counts_and_lengths() {
        let mut cat = catalogue();
        cat.set_road_distance("X", "Y", 1200.0).unwrap();
        cat.set_road_distance("Y", "Z", 1300.0).unwrap();
        cat.set_road_distance("Z", "Y", 1400.0).unwrap();
        cat.add_bus("3", &["X", "Y", "Z", "Y", "X"], false).unwrap();

        let info = cat.bus_info("3").unwrap();
        assert_eq!(info.stop_count, 5);
        assert_eq!(info.unique_stop_count, 3);
        assert_eq!(info.route_length, 1200.0 + 1300.0 + 1400.0 + 1200.0);
        assert!(info.curvature > 1.0);

        assert_eq!(cat.bus_info("404"), None);
    }

    #[test]
    fn bus_info_without_geographic_length() {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", LatLng::new(1.0, 1.0)).unwrap();
        cat.add_bus("solo", &["A"], true).unwrap();

        let info = cat.bus_info("solo").unwrap();
        assert_eq!(info.route_length, 0.0);
        assert_eq!(info.curvature, 1.0);
    }
}
