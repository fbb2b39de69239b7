use std::sync::Arc;

use crate::{
    routing::{BuildError, TransportRouter},
    structures::{BusInfo, RoutingSettings, TransportCatalogue, plan::RouteItinerary},
};

/// Read-only facade over a loaded catalogue and its router, shared by the
/// batch answering path and the web server.
pub struct RequestHandler {
    catalogue: Arc<TransportCatalogue>,
    router: TransportRouter,
}

impl RequestHandler {
    pub fn new(
        catalogue: TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<RequestHandler, BuildError> {
        let catalogue = Arc::new(catalogue);
        let router = TransportRouter::new(Arc::clone(&catalogue), settings)?;
        Ok(RequestHandler { catalogue, router })
    }

    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        self.catalogue.bus_info(name)
    }

    pub fn stop_buses(&self, name: &str) -> Option<Vec<String>> {
        self.catalogue
            .buses_by_stop(name)
            .map(|buses| buses.into_iter().map(str::to_string).collect())
    }

    pub fn build_route(&self, from: &str, to: &str) -> Option<RouteItinerary> {
        self.router.build_route(from, to)
    }
}
