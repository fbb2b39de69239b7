use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

use crate::structures::{EdgeID, RouteGraph, VertexID};

/// Path weight as a totally ordered priority.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    pub weight: f64,
    pub edges: Vec<EdgeID>,
}

/// Minimal-weight path from `source` to `target`, or `None` when `target`
/// cannot be reached. Edge weights must be non-negative.
///
/// All traversal state lives in this call, so any number of threads may
/// search the same graph at once.
pub fn find_path(graph: &RouteGraph, source: VertexID, target: VertexID) -> Option<RoutePath> {
    let vertex_count = graph.vertex_count();
    if source.0 >= vertex_count || target.0 >= vertex_count {
        return None;
    }

    let mut pq = PriorityQueue::<VertexID, Reverse<Cost>>::new();
    let mut weights = vec![f64::INFINITY; vertex_count];
    let mut origins: Vec<Option<EdgeID>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];

    weights[source.0] = 0.0;
    pq.push(source, Reverse(Cost(0.0)));

    while let Some((id, Reverse(Cost(weight)))) = pq.pop() {
        if id == target {
            return Some(RoutePath {
                weight,
                edges: reconstruct_path(graph, &origins, target),
            });
        }
        visited[id.0] = true;

        for &edge_id in graph.incident_edges(id) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            debug_assert!(edge.weight >= 0.0, "negative weight on edge {edge_id}");

            if visited[edge.to.0] {
                continue;
            }

            let candidate = weight + edge.weight;
            if candidate < weights[edge.to.0] {
                weights[edge.to.0] = candidate;
                origins[edge.to.0] = Some(edge_id);
                pq.push(edge.to, Reverse(Cost(candidate)));
            }
        }
    }

    None
}

fn reconstruct_path(
    graph: &RouteGraph,
    origins: &[Option<EdgeID>],
    target: VertexID,
) -> Vec<EdgeID> {
    let mut path = Vec::new();
    let mut current = target;

    while let Some(edge_id) = origins[current.0] {
        let Some(edge) = graph.edge(edge_id) else {
            break;
        };
        path.push(edge_id);
        current = edge.from;
    }

    path.reverse();
    path
}
