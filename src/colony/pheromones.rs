use crate::colony::ant::Ant;
use crate::colony::trail::{adjacent_in_cycle, positions};
use crate::config::params::AcoParams;
use crate::error::{AcoError, AcoResult};
use crate::graph::graph::WeightedGraph;

/// Symmetric pheromone intensities, one cell per ordered vertex pair.
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl PheromoneMatrix {
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            size,
            cells: vec![initial; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.size + j] = value;
        self.cells[j * self.size + i] = value;
    }

    /// Evaporates every edge, then lets each ant whose closed tour uses the
    /// edge deposit `q / length`, clamping after every single deposit and
    /// once more on the final value. The evaporated value itself is not
    /// clamped before the first deposit.
    ///
    /// Trail lengths are checked before any cell is written, so a failed
    /// update leaves the matrix as it was.
    pub fn update(&mut self, ants: &[Ant], graph: &WeightedGraph, params: &AcoParams) -> AcoResult<()> {
        let deposits = ants
            .iter()
            .map(|ant| {
                let length = ant.trail_length(graph);
                if length == 0 && self.size > 1 {
                    return Err(AcoError::malformed(format!(
                        "trail of ant {} has zero length",
                        ant.id()
                    )));
                }
                Ok((positions(ant.trail()), params.q / length as f64))
            })
            .collect::<AcoResult<Vec<(Vec<usize>, f64)>>>()?;

        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let mut value = (1.0 - params.rho) * self.get(i, j);
                for (pos, deposit) in &deposits {
                    if adjacent_in_cycle(pos, i, j) {
                        value = params.clamp_pheromone(value + deposit);
                    }
                }
                self.set_pair(i, j, params.clamp_pheromone(value));
            }
        }
        Ok(())
    }

    /// Values above the diagonal, row by row.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.size).flat_map(move |i| ((i + 1)..self.size).map(move |j| (i, j, self.get(i, j))))
    }
}
