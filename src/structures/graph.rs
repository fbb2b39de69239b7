use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexID(pub usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeID(pub usize);

impl Display for VertexID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Display for EdgeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexID,
    pub to: VertexID,
    pub weight: f64,
}

/// Directed weighted graph with a fixed vertex count. Edges are appended
/// while building and never removed.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeID>>,
}

impl RouteGraph {
    pub fn new(vertex_count: usize) -> RouteGraph {
        RouteGraph {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// # Panics
    ///
    /// Panics if either end of `edge` is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeID {
        assert!(edge.from.0 < self.incidence.len());
        assert!(edge.to.0 < self.incidence.len());

        let id = EdgeID(self.edges.len());
        self.edges.push(edge);
        self.incidence[edge.from.0].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeID) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of a vertex. Empty for an unknown vertex.
    pub fn incident_edges(&self, vertex: VertexID) -> &[EdgeID] {
        self.incidence
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
