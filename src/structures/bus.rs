use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::structures::StopID;

/// A bus line. For a shuttle (non-roundtrip) line, `stops` holds the
/// outbound stops followed by the way back, so its length is `2k - 1`
/// and the turnaround sits at `stops.len() / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopID>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BusID(pub u32);

impl Display for BusID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Bus {
    /// Expands the stop list given by a data source into the stored sequence.
    /// Roundtrip lists are already closed loops and are returned as-is.
    pub fn expand_stops<S: Clone>(stops: &[S], is_roundtrip: bool) -> Vec<S> {
        let mut expanded = stops.to_vec();
        if !is_roundtrip && stops.len() > 1 {
            expanded.extend(stops.iter().rev().skip(1).cloned());
        }
        expanded
    }

    /// Index of the turnaround stop of a shuttle line.
    pub fn turnaround(&self) -> usize {
        self.stops.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuttle_is_mirrored() {
        let stops = ["A", "B", "C"];
        assert_eq!(
            Bus::expand_stops(&stops, false),
            vec!["A", "B", "C", "B", "A"]
        );
    }

    #[test]
    fn roundtrip_is_kept() {
        let stops = ["A", "B", "C", "A"];
        assert_eq!(Bus::expand_stops(&stops, true), stops.to_vec());
    }

    #[test]
    fn single_stop_shuttle() {
        assert_eq!(Bus::expand_stops(&["A"], false), vec!["A"]);
        assert!(Bus::expand_stops::<&str>(&[], false).is_empty());
    }

    #[test]
    fn turnaround_index() {
        let bus = Bus {
            name: "14".to_string(),
            stops: vec![StopID(0), StopID(1), StopID(2), StopID(1), StopID(0)],
            is_roundtrip: false,
        };
        assert_eq!(bus.turnaround(), 2);
    }
}
