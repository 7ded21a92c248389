use crate::error::AcoResult;
use crate::graph::edge::Edge;
use crate::graph::graph::WeightedGraph;
use crate::graph::vertex::Vertex;
use crate::scenario::scenario::Scenario;

/// Four cities small enough to check by hand.
pub struct BasicScenario;

impl Scenario for BasicScenario {
    fn name(&self) -> &str {
        "basic"
    }

    fn build(&self) -> AcoResult<WeightedGraph> {
        let vertices = vec![
            Vertex::new(0, "Lisbon"),
            Vertex::new(1, "Porto"),
            Vertex::new(2, "Braga"),
            Vertex::new(3, "Faro"),
        ];

        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(0, 2, 2),
            Edge::new(0, 3, 3),
            Edge::new(1, 2, 4),
            Edge::new(1, 3, 5),
            Edge::new(2, 3, 6),
        ];

        WeightedGraph::new(vertices.len(), vertices, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_graph_is_complete() {
        let graph = BasicScenario.build().unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.weight(3, 2), 6);
        assert_eq!(graph.vertex_for("Braga"), Some(2));
        assert!(graph.validate_complete().is_ok());
    }
}
