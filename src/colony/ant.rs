use crate::colony::pheromones::PheromoneMatrix;
use crate::colony::trail::{build_trail, cycle_length, random_trail, trail_length};
use crate::config::params::AcoParams;
use crate::error::AcoResult;
use crate::graph::graph::WeightedGraph;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Ant {
    id: usize,
    /// permutation of all vertices, read as a cycle
    trail: Vec<usize>,
}

impl Ant {
    pub fn new<R: Rng + ?Sized>(size: usize, id: usize, rng: &mut R) -> Self {
        let start = rng.gen_range(0..size);
        Self {
            id,
            trail: random_trail(start, size, rng),
        }
    }

    #[cfg(test)]
    pub fn from_trail(id: usize, trail: Vec<usize>) -> Self {
        Self { id, trail }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn trail(&self) -> &[usize] {
        &self.trail
    }

    /// Replaces the whole trail with a pheromone-guided one from a fresh
    /// random start. On error the previous trail is kept.
    pub fn refresh<R: Rng + ?Sized>(
        &mut self,
        pheromones: &PheromoneMatrix,
        graph: &WeightedGraph,
        params: &AcoParams,
        rng: &mut R,
    ) -> AcoResult<()> {
        let start = rng.gen_range(0..self.trail.len());
        self.trail = build_trail(start, pheromones, graph, params, rng)?;
        Ok(())
    }

    /// Ranking length: the open path, without the closing edge.
    pub fn trail_length(&self, graph: &WeightedGraph) -> u64 {
        trail_length(&self.trail, graph)
    }

    pub fn cycle_length(&self, graph: &WeightedGraph) -> u64 {
        cycle_length(&self.trail, graph)
    }
}
