mod itinerary;
mod leg;

pub use itinerary::*;
pub use leg::*;
