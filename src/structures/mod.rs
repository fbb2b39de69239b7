mod bus;
mod catalogue;
mod config;
mod edge;
mod geo;
mod graph;
pub mod plan;
mod routingsettings;
mod stop;

pub use bus::*;
pub use catalogue::*;
pub use config::*;
pub use edge::*;
pub use geo::*;
pub use graph::*;
pub use routingsettings::*;
pub use stop::*;
