mod builder;
mod dijkstra;
mod router;

pub use builder::*;
pub use dijkstra::*;
pub use router::*;
