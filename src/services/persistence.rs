use std::{fs, path::Path};

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::structures::{CatalogueError, RoutingSettings, Stop, StopID, TransportCatalogue};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to access base file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode base: {0}")]
    Postcard(#[from] postcard::Error),

    #[error("stored catalogue is inconsistent: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("stored catalogue references unknown stop #{0}")]
    UnknownStopIndex(u32),
}

/// On-disk form of the catalogue. Stops are referenced by their position
/// in `stops`; only directly recorded distances are kept.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBase {
    stops: Vec<Stop>,
    distances: Vec<StoredDistance>,
    buses: Vec<StoredBus>,
    routing_settings: RoutingSettings,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredDistance {
    from: u32,
    to: u32,
    meters: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredBus {
    name: String,
    stops: Vec<u32>,
    is_roundtrip: bool,
}

pub fn encode_base(
    cat: &TransportCatalogue,
    settings: &RoutingSettings,
) -> Result<Vec<u8>, PersistenceError> {
    let mut distances = cat
        .distances()
        .map(|(from, to, meters)| StoredDistance {
            from: from.0,
            to: to.0,
            meters,
        })
        .collect::<Vec<_>>();
    distances.sort_by_key(|d| (d.from, d.to));

    let stored = StoredBase {
        stops: cat.stops().to_vec(),
        distances,
        buses: cat
            .buses()
            .iter()
            .map(|bus| StoredBus {
                name: bus.name.clone(),
                stops: bus.stops.iter().map(|s| s.0).collect(),
                is_roundtrip: bus.is_roundtrip,
            })
            .collect(),
        routing_settings: *settings,
    };

    Ok(to_allocvec(&stored)?)
}

pub fn decode_base(
    bytes: &[u8],
) -> Result<(TransportCatalogue, RoutingSettings), PersistenceError> {
    let stored: StoredBase = from_bytes(bytes)?;
    let mut cat = TransportCatalogue::new();

    for stop in &stored.stops {
        cat.add_stop(&stop.name, stop.lat_lng)?;
    }

    for distance in &stored.distances {
        stop_name(&stored.stops, distance.from)?;
        stop_name(&stored.stops, distance.to)?;
        cat.set_road_distance_by_id(
            StopID(distance.from),
            StopID(distance.to),
            distance.meters,
        )?;
    }

    for bus in &stored.buses {
        let stops = bus
            .stops
            .iter()
            .map(|&index| stop_name(&stored.stops, index))
            .collect::<Result<Vec<_>, _>>()?;
        cat.add_bus(&bus.name, &stops, bus.is_roundtrip)?;
    }

    cat.validate()?;

    Ok((cat, stored.routing_settings))
}

fn stop_name(stops: &[Stop], index: u32) -> Result<&str, PersistenceError> {
    stops
        .get(index as usize)
        .map(|s| s.name.as_str())
        .ok_or(PersistenceError::UnknownStopIndex(index))
}

pub fn save_base(
    path: impl AsRef<Path>,
    cat: &TransportCatalogue,
    settings: &RoutingSettings,
) -> Result<(), PersistenceError> {
    let bytes = encode_base(cat, settings)?;
    fs::write(path.as_ref(), &bytes)?;
    info!(
        "Base saved to {} ({} bytes)",
        path.as_ref().display(),
        bytes.len()
    );
    Ok(())
}

pub fn load_base(
    path: impl AsRef<Path>,
) -> Result<(TransportCatalogue, RoutingSettings), PersistenceError> {
    let bytes = fs::read(path.as_ref())?;
    let res = decode_base(&bytes)?;
    info!("Base restored from {}", path.as_ref().display());
    Ok(res)
}
