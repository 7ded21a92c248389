use crate::config::params::AcoParams;
use crate::scenario::basic::BasicScenario;
use crate::scenario::file::FileScenario;
use crate::scenario::random::RandomScenario;
use crate::scenario::scenario::Scenario;
use clap::Parser;
use std::path::PathBuf;

/// Ant colony optimization for the symmetric travelling salesman problem.
#[derive(Parser, Debug)]
#[command(name = "antgraph", version)]
pub struct Args {
    /// City list file to solve
    #[arg(long, conflicts_with = "random")]
    pub graph: Option<PathBuf>,

    /// Solve a random complete graph with this many cities
    #[arg(long, value_name = "CITIES")]
    pub random: Option<usize>,

    /// Largest distance drawn for a random graph
    #[arg(long, requires = "random", default_value_t = RandomScenario::DEFAULT_MAX_DISTANCE)]
    pub max_distance: u32,

    /// Seed for every random draw; taken from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Open the interactive viewer instead of printing a report
    #[arg(long)]
    pub tui: bool,

    #[arg(long, default_value_t = AcoParams::default().alpha)]
    pub alpha: u32,

    #[arg(long, default_value_t = AcoParams::default().beta)]
    pub beta: u32,

    #[arg(long, default_value_t = AcoParams::default().rho)]
    pub rho: f64,

    #[arg(long, default_value_t = AcoParams::default().q)]
    pub q: f64,

    #[arg(long, default_value_t = AcoParams::default().num_ants)]
    pub ants: usize,

    #[arg(long, default_value_t = AcoParams::default().max_time)]
    pub max_time: usize,

    #[arg(long, default_value_t = AcoParams::default().initial_pheromone)]
    pub initial_pheromone: f64,
}

impl Args {
    /// Clamp bounds are not exposed on the command line.
    pub fn params(&self) -> AcoParams {
        AcoParams {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            q: self.q,
            num_ants: self.ants,
            max_time: self.max_time,
            initial_pheromone: self.initial_pheromone,
            ..AcoParams::default()
        }
    }

    /// Graph source picked by the flags, the built-in demo when none is given.
    pub fn scenario(&self, seed: u64) -> Box<dyn Scenario> {
        match (&self.graph, self.random) {
            (Some(path), _) => Box::new(FileScenario::new(path.clone())),
            (None, Some(cities)) => {
                Box::new(RandomScenario::new(cities, seed).with_max_distance(self.max_distance))
            }
            (None, None) => Box::new(BasicScenario),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::try_parse_from(["antgraph"]).unwrap();
        assert_eq!(args.params(), AcoParams::default());
        assert!(args.graph.is_none());
        assert!(!args.tui);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "antgraph",
            "--random",
            "12",
            "--seed",
            "7",
            "--ants",
            "3",
            "--max-time",
            "50",
            "--alpha",
            "1",
        ])
        .unwrap();
        let params = args.params();
        assert_eq!(args.random, Some(12));
        assert_eq!(args.seed, Some(7));
        assert_eq!(params.num_ants, 3);
        assert_eq!(params.max_time, 50);
        assert_eq!(params.alpha, 1);
        assert_eq!(params.beta, AcoParams::default().beta);
    }

    #[test]
    fn test_graph_and_random_conflict() {
        let result = Args::try_parse_from(["antgraph", "--graph", "a.txt", "--random", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_max_distance_shapes_random_graph() {
        let args =
            Args::try_parse_from(["antgraph", "--random", "6", "--max-distance", "2"]).unwrap();
        assert_eq!(args.max_distance, 2);
        let graph = args.scenario(11).build().unwrap();
        assert_eq!(graph.vertex_count(), 6);
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert!((1..=2).contains(&graph.weight(i, j)));
            }
        }
    }

    #[test]
    fn test_max_distance_requires_random() {
        let result = Args::try_parse_from(["antgraph", "--max-distance", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_scenario_is_demo() {
        let args = Args::try_parse_from(["antgraph"]).unwrap();
        assert_eq!(args.max_distance, RandomScenario::DEFAULT_MAX_DISTANCE);
        assert_eq!(args.scenario(0).build().unwrap().vertex_count(), 4);
    }
}
