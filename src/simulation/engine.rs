use crate::colony::ant::Ant;
use crate::colony::pheromones::PheromoneMatrix;
use crate::config::params::AcoParams;
use crate::error::{AcoError, AcoResult};
use crate::graph::graph::WeightedGraph;
use crate::state::snapshot::Snapshot;
use rand::rngs::StdRng;
use std::mem;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Terminated,
}

/// Best trail seen so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    trail: Vec<usize>,
    length: u64,
    /// tick that found it, `None` for the initial population
    found_at: Option<usize>,
}

impl Solution {
    pub fn trail(&self) -> &[usize] {
        &self.trail
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn found_at(&self) -> Option<usize> {
        self.found_at
    }
}

pub struct AcoEngine {
    graph: WeightedGraph,
    params: AcoParams,
    ants: Vec<Ant>,
    pheromones: PheromoneMatrix,
    rng: StdRng,
    state: EngineState,
    ticks: usize,
    best: Solution,
    previous_snapshot: Option<Snapshot>,
    current_snapshot: Snapshot,
    history: Vec<u64>,
}

impl AcoEngine {
    pub fn new(graph: WeightedGraph, params: AcoParams, mut rng: StdRng) -> AcoResult<Self> {
        params.validate()?;
        let size = graph.vertex_count();
        if size == 0 {
            return Err(AcoError::malformed("graph has no vertices"));
        }
        graph.validate_complete()?;

        let ants: Vec<Ant> = (0..params.num_ants)
            .map(|id| Ant::new(size, id, &mut rng))
            .collect();
        let pheromones = PheromoneMatrix::new(size, params.initial_pheromone);

        let (idx, length) = round_best(&ants, &graph);
        let best = Solution {
            trail: ants[idx].trail().to_vec(),
            length,
            found_at: None,
        };
        let current_snapshot = Snapshot::new(
            0,
            best.trail.clone(),
            length,
            best.trail.clone(),
            length,
            false,
        );
        let state = if params.max_time == 0 {
            EngineState::Terminated
        } else {
            EngineState::Running
        };

        info!(
            cities = size,
            ants = params.num_ants,
            max_time = params.max_time,
            initial_best = length,
            "colony initialized"
        );

        Ok(Self {
            graph,
            params,
            ants,
            pheromones,
            rng,
            state,
            ticks: 0,
            best,
            previous_snapshot: None,
            current_snapshot,
            history: vec![length],
        })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// Round-best length of the initial population followed by every tick.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        &self.current_snapshot
    }

    pub fn previous_snapshot(&self) -> &Snapshot {
        self.previous_snapshot
            .as_ref()
            .unwrap_or(&self.current_snapshot)
    }

    /// Runs one tick. Does nothing once the engine is terminated; any error
    /// terminates it.
    pub fn step(&mut self) -> AcoResult<()> {
        if self.is_terminated() {
            return Ok(());
        }
        let tick = self.ticks;
        if let Err(err) = self.advance(tick) {
            self.state = EngineState::Terminated;
            warn!(tick, error = %err, "run aborted");
            return Err(err);
        }
        self.ticks += 1;
        if self.ticks >= self.params.max_time {
            self.state = EngineState::Terminated;
            info!(
                ticks = self.ticks,
                best = self.best.length,
                "time budget exhausted"
            );
        }
        Ok(())
    }

    /// Steps until the tick budget is spent.
    pub fn run(&mut self) -> AcoResult<&Solution> {
        while !self.is_terminated() {
            self.step()?;
        }
        Ok(&self.best)
    }

    fn advance(&mut self, tick: usize) -> AcoResult<()> {
        for ant in self.ants.iter_mut() {
            let id = ant.id();
            ant.refresh(&self.pheromones, &self.graph, &self.params, &mut self.rng)
                .map_err(|e| e.in_round(tick, Some(id)))?;
        }

        self.pheromones
            .update(&self.ants, &self.graph, &self.params)
            .map_err(|e| e.in_round(tick, None))?;

        let (idx, length) = round_best(&self.ants, &self.graph);
        let improved = length < self.best.length;
        if improved {
            self.best = Solution {
                trail: self.ants[idx].trail().to_vec(),
                length,
                found_at: Some(tick),
            };
            info!(tick, length, "new best trail");
        }
        debug!(tick, round_best = length, best = self.best.length, "tick complete");

        self.history.push(length);
        let snapshot = Snapshot::new(
            tick + 1,
            self.ants[idx].trail().to_vec(),
            length,
            self.best.trail.clone(),
            self.best.length,
            improved,
        );
        let old_snapshot = mem::replace(&mut self.current_snapshot, snapshot);
        self.previous_snapshot = Some(old_snapshot);
        Ok(())
    }
}

/// Index and length of the shortest trail; the first one wins ties.
fn round_best(ants: &[Ant], graph: &WeightedGraph) -> (usize, u64) {
    ants.iter()
        .map(|ant| ant.trail_length(graph))
        .enumerate()
        .fold((0, u64::MAX), |best, (i, len)| {
            if len < best.1 { (i, len) } else { best }
        })
}
