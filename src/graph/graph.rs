use crate::error::{AcoError, AcoResult};
use crate::graph::edge::Edge;
use crate::graph::vertex::Vertex;
use std::collections::HashMap;

/// Complete undirected graph stored as a flat `n * n` weight matrix.
pub struct WeightedGraph {
    size: usize,
    weights: Vec<u32>,
    names: Vec<Option<String>>,
    vertex_for: HashMap<String, usize>,
}

impl WeightedGraph {
    /// Builds a graph over `size` vertices. `vertices` may be empty for an
    /// unnamed graph, otherwise it must name every vertex exactly once.
    /// Pairs not covered by `edges` keep weight 0.
    pub fn new(size: usize, vertices: Vec<Vertex>, edges: Vec<Edge>) -> AcoResult<Self> {
        let cells = size.checked_mul(size).ok_or_else(|| {
            AcoError::malformed(format!("{} vertices do not fit a weight matrix", size))
        })?;
        if !vertices.is_empty() && vertices.len() != size {
            return Err(AcoError::malformed(format!(
                "declared {} vertices but {} names were supplied",
                size,
                vertices.len()
            )));
        }

        let mut names: Vec<Option<String>> = vec![None; size];
        let mut vertex_for = HashMap::with_capacity(vertices.len());
        for v in vertices {
            if v.index() >= size {
                return Err(AcoError::malformed(format!(
                    "vertex index {} is out of range for {} vertices",
                    v.index(),
                    size
                )));
            }
            if names[v.index()].is_some() {
                return Err(AcoError::malformed(format!(
                    "vertex index {} is declared twice",
                    v.index()
                )));
            }
            if vertex_for.contains_key(v.name()) {
                return Err(AcoError::malformed(format!(
                    "vertex name `{}` is declared twice",
                    v.name()
                )));
            }
            vertex_for.insert(v.name().to_string(), v.index());
            names[v.index()] = Some(v.name().to_string());
        }

        let mut weights = vec![0; cells];
        for e in edges {
            if e.from() >= size || e.to() >= size {
                return Err(AcoError::malformed(format!(
                    "edge ({}, {}) references a vertex outside 0..{}",
                    e.from(),
                    e.to(),
                    size
                )));
            }
            if e.from() == e.to() {
                return Err(AcoError::malformed(format!(
                    "edge ({}, {}) is a self loop",
                    e.from(),
                    e.to()
                )));
            }
            weights[e.from() * size + e.to()] = e.weight();
            weights[e.to() * size + e.from()] = e.weight();
        }

        Ok(Self {
            size,
            weights,
            names,
            vertex_for,
        })
    }

    /// Builds a graph from the upper triangle of its weight matrix: row `i`
    /// lists `w(i, i+1) .. w(i, size-1)`. Exactly `size - 1` rows are expected.
    pub fn from_rows(size: usize, vertices: Vec<Vertex>, rows: Vec<Vec<u32>>) -> AcoResult<Self> {
        let expected = size.saturating_sub(1);
        if rows.len() != expected {
            return Err(AcoError::malformed(format!(
                "declared {} vertices but {} weight rows were supplied (expected {})",
                size,
                rows.len(),
                expected
            )));
        }
        let edges = rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(k, &w)| Edge::new(i, i + k + 1, w))
            })
            .collect();
        Self::new(size, vertices, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.size
    }

    pub fn weight(&self, from: usize, to: usize) -> u32 {
        self.weights[from * self.size + to]
    }

    /// Row of `n` weights from `vertex`, its own (unused) entry included.
    pub fn neighbors(&self, vertex: usize) -> &[u32] {
        &self.weights[vertex * self.size..(vertex + 1) * self.size]
    }

    pub fn name_of(&self, vertex: usize) -> Option<&str> {
        self.names.get(vertex).and_then(|n| n.as_deref())
    }

    pub fn vertex_for(&self, name: &str) -> Option<usize> {
        self.vertex_for.get(name).copied()
    }

    /// Name of the vertex, or its index when it has none.
    pub fn label(&self, vertex: usize) -> String {
        self.name_of(vertex)
            .map(str::to_string)
            .unwrap_or_else(|| vertex.to_string())
    }

    /// Rejects graphs with a zero weight between distinct vertices.
    pub fn validate_complete(&self) -> AcoResult<()> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.weight(i, j) == 0 {
                    return Err(AcoError::malformed(format!(
                        "edge ({}, {}) has no positive weight",
                        self.label(i),
                        self.label(j)
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Vertex> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Vertex::new(i, *n))
            .collect()
    }

    #[test]
    fn test_rows_fill_symmetric_matrix() {
        let graph = WeightedGraph::from_rows(
            4,
            named(&["a", "b", "c", "d"]),
            vec![vec![1, 2, 3], vec![4, 5], vec![6]],
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.weight(0, 1), 1);
        assert_eq!(graph.weight(1, 0), 1);
        assert_eq!(graph.weight(2, 3), 6);
        assert_eq!(graph.weight(3, 2), 6);
        assert_eq!(graph.neighbors(1), &[1, 0, 4, 5]);
        assert!(graph.validate_complete().is_ok());
    }

    #[test]
    fn test_name_lookup_both_directions() {
        let graph = WeightedGraph::from_rows(2, named(&["x", "y"]), vec![vec![7]]).unwrap();
        assert_eq!(graph.name_of(1), Some("y"));
        assert_eq!(graph.vertex_for("x"), Some(0));
        assert_eq!(graph.vertex_for("z"), None);
        assert_eq!(graph.label(0), "x");
    }

    #[test]
    fn test_unnamed_graph_labels_by_index() {
        let graph = WeightedGraph::new(3, Vec::new(), vec![Edge::new(0, 1, 2)]).unwrap();
        assert_eq!(graph.name_of(2), None);
        assert_eq!(graph.label(2), "2");
    }

    #[test]
    fn test_row_count_mismatch_is_rejected() {
        let result = WeightedGraph::from_rows(3, named(&["a", "b", "c"]), vec![vec![1, 2]]);
        assert!(matches!(result, Err(AcoError::MalformedInput { .. })));
    }

    #[test]
    fn test_name_count_mismatch_is_rejected() {
        let result = WeightedGraph::from_rows(3, named(&["a", "b"]), vec![vec![1, 2], vec![3]]);
        assert!(matches!(result, Err(AcoError::MalformedInput { .. })));
    }

    #[test]
    fn test_duplicate_index_is_rejected() {
        let vertices = vec![Vertex::new(0, "a"), Vertex::new(0, "b")];
        let result = WeightedGraph::from_rows(2, vertices, vec![vec![1]]);
        assert!(matches!(result, Err(AcoError::MalformedInput { .. })));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let vertices = vec![Vertex::new(0, "a"), Vertex::new(1, "a")];
        let result = WeightedGraph::from_rows(2, vertices, vec![vec![1]]);
        assert!(matches!(result, Err(AcoError::MalformedInput { .. })));
    }

    #[test]
    fn test_missing_weight_fails_validation() {
        let graph = WeightedGraph::from_rows(
            3,
            named(&["a", "b", "c"]),
            vec![vec![1], vec![2]],
        )
        .unwrap();
        assert_eq!(graph.weight(0, 2), 0);
        assert!(matches!(
            graph.validate_complete(),
            Err(AcoError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let result = WeightedGraph::new(2, Vec::new(), vec![Edge::new(1, 1, 3)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_matrix_size_overflow_is_rejected() {
        let result = WeightedGraph::new(usize::MAX, Vec::new(), Vec::new());
        assert!(matches!(result, Err(AcoError::MalformedInput { .. })));
    }
}
