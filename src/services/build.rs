use std::time::Instant;

use tracing::info;

use crate::{
    ingestion::requests::BaseRequest,
    structures::{Bus, CatalogueError, LatLng, TransportCatalogue},
};

/// Loads base requests into a new catalogue: stops first, then their road
/// distances, then buses. The result is validated, so every bus can be
/// turned into route graph edges.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let before = Instant::now();
    let mut cat = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            cat.add_stop(&stop.name, LatLng::new(stop.latitude, stop.longitude))?;
        }
    }

    let mut distances = 0;
    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, meters) in &stop.road_distances {
                cat.set_road_distance(&stop.name, to, *meters)?;
                distances += 1;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            let stops = Bus::expand_stops(&bus.stops, bus.is_roundtrip);
            cat.add_bus(&bus.name, &stops, bus.is_roundtrip)?;
        }
    }

    cat.validate()?;

    info!(
        "Catalogue loaded in {}ms: {} stops, {} buses, {} distances",
        before.elapsed().as_millis(),
        cat.stop_count(),
        cat.buses().len(),
        distances
    );

    Ok(cat)
}
