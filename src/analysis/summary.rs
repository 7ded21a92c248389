use crate::colony::ant::Ant;
use crate::colony::pheromones::PheromoneMatrix;
use crate::graph::graph::WeightedGraph;

/// Vertices shown at each end of an abbreviated trail.
const TRAIL_EDGE: usize = 4;

pub struct AntSummary {
    id: usize,
    trail: String,
    length: u64,
    cycle_length: u64,
}

impl AntSummary {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn trail(&self) -> &str {
        &self.trail
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn cycle_length(&self) -> u64 {
        self.cycle_length
    }
}

/// One row per ant, shortest trail first.
pub fn summarize_ants(ants: &[Ant], graph: &WeightedGraph) -> Vec<AntSummary> {
    let mut rows = ants
        .iter()
        .map(|ant| AntSummary {
            id: ant.id(),
            trail: abbreviate_trail(ant.trail(), graph),
            length: ant.trail_length(graph),
            cycle_length: ant.cycle_length(graph),
        })
        .collect::<Vec<AntSummary>>();
    rows.sort_by_key(|r| (r.length, r.id));
    rows
}

/// Named trail with the middle elided when it is longer than both ends.
pub fn abbreviate_trail(trail: &[usize], graph: &WeightedGraph) -> String {
    let names = |vs: &[usize]| {
        vs.iter()
            .map(|&v| graph.label(v))
            .collect::<Vec<String>>()
            .join(" ")
    };
    if trail.len() <= 2 * TRAIL_EDGE {
        names(trail)
    } else {
        format!(
            "{} . . . {}",
            names(&trail[..TRAIL_EDGE]),
            names(&trail[trail.len() - TRAIL_EDGE..])
        )
    }
}

#[derive(Debug, PartialEq)]
pub struct PheromoneSummary {
    min: f64,
    max: f64,
    mean: f64,
    strongest: (usize, usize),
}

impl PheromoneSummary {
    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Edge carrying the most pheromone; the first one wins ties.
    pub fn strongest(&self) -> (usize, usize) {
        self.strongest
    }
}

/// Statistics over the distinct edges, `None` below two vertices.
pub fn summarize_pheromones(matrix: &PheromoneMatrix) -> Option<PheromoneSummary> {
    let (count, sum, min, max, strongest) = matrix.edges().fold(
        (0usize, 0.0, f64::INFINITY, f64::NEG_INFINITY, (0, 0)),
        |(count, sum, min, max, strongest), (i, j, v)| {
            let strongest = if v > max { (i, j) } else { strongest };
            (count + 1, sum + v, min.min(v), max.max(v), strongest)
        },
    );
    if count == 0 {
        None
    } else {
        Some(PheromoneSummary {
            min,
            max,
            mean: sum / count as f64,
            strongest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::params::AcoParams;
    use crate::graph::reader::parse_graph;
    use approx::assert_relative_eq;

    const CITIES: &str = "4
0 Lisbon
1 Porto
2 Braga
3 Faro
1 2 3
4 5
6
";

    #[test]
    fn test_rows_sorted_by_length() {
        let graph = parse_graph(CITIES).unwrap();
        let ants = vec![
            Ant::from_trail(0, vec![2, 3, 1, 0]),
            Ant::from_trail(1, vec![3, 0, 1, 2]),
        ];
        let rows = summarize_ants(&ants, &graph);
        assert_eq!(rows[0].id(), 1);
        assert_eq!(rows[0].length(), 8);
        assert_eq!(rows[0].cycle_length(), 14);
        assert_eq!(rows[0].trail(), "Faro Lisbon Porto Braga");
        assert_eq!(rows[1].id(), 0);
        assert_eq!(rows[1].length(), 12);
    }

    #[test]
    fn test_long_trail_is_elided() {
        let graph = WeightedGraph::new(10, Vec::new(), Vec::new()).unwrap();
        let trail = (0..10).collect::<Vec<_>>();
        assert_eq!(abbreviate_trail(&trail, &graph), "0 1 2 3 . . . 6 7 8 9");
        assert_eq!(abbreviate_trail(&trail[..8], &graph), "0 1 2 3 4 5 6 7");
    }

    #[test]
    fn test_pheromone_statistics() {
        let graph = parse_graph(CITIES).unwrap();
        let params = AcoParams::default();
        let mut matrix = PheromoneMatrix::new(4, 0.01);
        matrix
            .update(&[Ant::from_trail(0, vec![0, 1, 2, 3])], &graph, &params)
            .unwrap();

        let summary = summarize_pheromones(&matrix).unwrap();
        let evaporated = (1.0 - params.rho) * 0.01;
        let reinforced = evaporated + params.q / 11.0;
        assert_relative_eq!(summary.min(), evaporated);
        assert_relative_eq!(summary.max(), reinforced);
        assert_relative_eq!(summary.mean(), (4.0 * reinforced + 2.0 * evaporated) / 6.0, epsilon = 1e-12);
        assert_eq!(summary.strongest(), (0, 1));
    }

    #[test]
    fn test_no_edges_no_summary() {
        assert_eq!(summarize_pheromones(&PheromoneMatrix::new(1, 0.5)), None);
    }
}
