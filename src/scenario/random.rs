use crate::error::{AcoError, AcoResult};
use crate::graph::edge::Edge;
use crate::graph::graph::WeightedGraph;
use crate::graph::vertex::Vertex;
use crate::scenario::scenario::Scenario;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Complete graph with uniformly drawn integer distances.
pub struct RandomScenario {
    cities: usize,
    max_distance: u32,
    seed: u64,
    name: String,
}

impl RandomScenario {
    pub const DEFAULT_MAX_DISTANCE: u32 = 8;

    pub fn new(cities: usize, seed: u64) -> Self {
        Self {
            cities,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            seed,
            name: format!("random-{}", cities),
        }
    }

    pub fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }
}

impl Scenario for RandomScenario {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self) -> AcoResult<WeightedGraph> {
        if self.max_distance == 0 {
            return Err(AcoError::invalid("max_distance", "must be at least 1"));
        }
        let mut rng = StdRng::seed_from_u64(self.seed);

        let vertices = (0..self.cities)
            .map(|i| Vertex::new(i, format!("c{}", i)))
            .collect();

        let mut edges = Vec::with_capacity(self.cities * self.cities.saturating_sub(1) / 2);
        for i in 0..self.cities {
            for j in (i + 1)..self.cities {
                edges.push(Edge::new(i, j, rng.gen_range(1..=self.max_distance)));
            }
        }

        WeightedGraph::new(self.cities, vertices, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_complete_and_bounded() {
        let graph = RandomScenario::new(15, 3).build().unwrap();
        assert_eq!(graph.vertex_count(), 15);
        assert!(graph.validate_complete().is_ok());
        for i in 0..15 {
            for j in 0..15 {
                if i != j {
                    assert!((1..=8).contains(&graph.weight(i, j)));
                    assert_eq!(graph.weight(i, j), graph.weight(j, i));
                }
            }
        }
        assert_eq!(graph.name_of(14), Some("c14"));
    }

    #[test]
    fn test_seed_reproduces_graph() {
        let a = RandomScenario::new(10, 99).with_max_distance(100).build().unwrap();
        let b = RandomScenario::new(10, 99).with_max_distance(100).build().unwrap();
        for i in 0..10 {
            assert_eq!(a.neighbors(i), b.neighbors(i));
        }
    }

    #[test]
    fn test_zero_max_distance_rejected() {
        let result = RandomScenario::new(4, 0).with_max_distance(0).build();
        assert!(matches!(result, Err(AcoError::InvalidParameter { .. })));
    }
}
