//! Transport catalogue: stops, bus lines and road distances, with
//! fastest-route queries over a wait/ride graph.

pub mod ingestion;
pub mod routing;
pub mod services;
pub mod structures;
pub mod web;
