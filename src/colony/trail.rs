//! Trail construction: the random tours ants start from and the
//! pheromone-guided roulette-wheel tours they build every round.

use crate::colony::pheromones::PheromoneMatrix;
use crate::config::params::AcoParams;
use crate::error::{AcoError, AcoResult};
use crate::graph::graph::WeightedGraph;
use rand::Rng;
use tracing::debug;

/// Uniformly shuffled tour over `size` vertices with `start` moved to the front.
pub fn random_trail<R: Rng + ?Sized>(start: usize, size: usize, rng: &mut R) -> Vec<usize> {
    let mut trail: Vec<usize> = (0..size).collect();
    for i in 0..size {
        let r = rng.gen_range(i..size);
        trail.swap(i, r);
    }
    if let Some(idx) = trail.iter().position(|&v| v == start) {
        trail.swap(0, idx);
    }
    trail
}

/// Tour starting at `start` where every next city is drawn from the
/// pheromone/distance weighted distribution over the unvisited ones.
pub fn build_trail<R: Rng + ?Sized>(
    start: usize,
    pheromones: &PheromoneMatrix,
    graph: &WeightedGraph,
    params: &AcoParams,
    rng: &mut R,
) -> AcoResult<Vec<usize>> {
    let size = graph.vertex_count();
    let mut trail = Vec::with_capacity(size);
    let mut visited = vec![false; size];

    trail.push(start);
    visited[start] = true;

    for step in 1..size {
        let current = trail[step - 1];
        let probabilities =
            selection_probabilities(current, step, pheromones, graph, params, &visited)?;
        let p = rng.gen_range(0.0..1.0);
        let next = match roulette_select(&probabilities, p) {
            Some(city) => city,
            None => {
                let city = visited
                    .iter()
                    .rposition(|v| !v)
                    .ok_or(AcoError::DegenerateDistribution { from: current, step })?;
                debug!(current, step, p, city, "roulette exhausted, taking last unvisited city");
                city
            }
        };
        trail.push(next);
        visited[next] = true;
    }

    Ok(trail)
}

/// Clamped `tau^alpha * eta^beta` for every city, zero for `current` and
/// the visited ones.
pub fn desirabilities(
    current: usize,
    pheromones: &PheromoneMatrix,
    graph: &WeightedGraph,
    params: &AcoParams,
    visited: &[bool],
) -> Vec<f64> {
    graph
        .neighbors(current)
        .iter()
        .enumerate()
        .map(|(city, &weight)| {
            if city == current || visited[city] {
                0.0
            } else {
                let tau = pheromones.get(current, city).powi(params.alpha_exponent());
                let eta = (1.0 / weight as f64).powi(params.beta_exponent());
                params.clamp_taueta(tau * eta)
            }
        })
        .collect()
}

/// Desirabilities normalized into a distribution over the unvisited cities.
pub fn selection_probabilities(
    current: usize,
    step: usize,
    pheromones: &PheromoneMatrix,
    graph: &WeightedGraph,
    params: &AcoParams,
    visited: &[bool],
) -> AcoResult<Vec<f64>> {
    let mut taueta = desirabilities(current, pheromones, graph, params, visited);
    let sum: f64 = taueta.iter().sum();
    if !(sum > 0.0 && sum.is_finite()) {
        return Err(AcoError::DegenerateDistribution {
            from: current,
            step,
        });
    }
    taueta.iter_mut().for_each(|t| *t /= sum);
    Ok(taueta)
}

/// Monte Carlo selection: the city whose half-open cumulative interval
/// `[c(i), c(i+1))` contains `p`. `None` when rounding leaves `p` past the
/// last interval.
pub fn roulette_select(probabilities: &[f64], p: f64) -> Option<usize> {
    let mut lower = 0.0;
    for (city, &prob) in probabilities.iter().enumerate() {
        let upper = lower + prob;
        if p >= lower && p < upper {
            return Some(city);
        }
        lower = upper;
    }
    None
}

/// Sum of consecutive edge weights; the closing edge is not included.
pub fn trail_length(trail: &[usize], graph: &WeightedGraph) -> u64 {
    trail
        .windows(2)
        .map(|w| graph.weight(w[0], w[1]) as u64)
        .sum()
}

/// Length of the closed tour, closing edge included.
pub fn cycle_length(trail: &[usize], graph: &WeightedGraph) -> u64 {
    match (trail.first(), trail.last()) {
        (Some(&first), Some(&last)) if trail.len() > 1 => {
            trail_length(trail, graph) + graph.weight(last, first) as u64
        }
        _ => 0,
    }
}

/// Whether `from` and `to` are neighbours on the tour read as a cycle.
pub fn is_edge_in_trail(from: usize, to: usize, trail: &[usize]) -> bool {
    let hit = |a: usize, b: usize| (a == from && b == to) || (a == to && b == from);
    if trail.windows(2).any(|w| hit(w[0], w[1])) {
        return true;
    }
    match (trail.first(), trail.last()) {
        (Some(&first), Some(&last)) if trail.len() > 1 => hit(last, first),
        _ => false,
    }
}

/// Position of every vertex in a tour.
pub fn positions(trail: &[usize]) -> Vec<usize> {
    let mut pos = vec![0; trail.len()];
    trail.iter().enumerate().for_each(|(i, &v)| pos[v] = i);
    pos
}

/// Same answer as [`is_edge_in_trail`] in constant time given [`positions`].
pub fn adjacent_in_cycle(pos: &[usize], from: usize, to: usize) -> bool {
    let len = pos.len();
    if len < 2 || from == to {
        return false;
    }
    let diff = pos[from].abs_diff(pos[to]);
    diff == 1 || diff == len - 1
}
