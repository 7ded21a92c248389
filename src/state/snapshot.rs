/// What one tick produced, as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    tick: usize,
    round_best: Vec<usize>,
    round_best_length: u64,
    best: Vec<usize>,
    best_length: u64,
    improved: bool,
}

impl Snapshot {
    pub fn new(
        tick: usize,
        round_best: Vec<usize>,
        round_best_length: u64,
        best: Vec<usize>,
        best_length: u64,
        improved: bool,
    ) -> Self {
        Self {
            tick,
            round_best,
            round_best_length,
            best,
            best_length,
            improved,
        }
    }

    /// Number of completed ticks; 0 for the initial population.
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn round_best(&self) -> &[usize] {
        &self.round_best
    }

    pub fn round_best_length(&self) -> u64 {
        self.round_best_length
    }

    pub fn best(&self) -> &[usize] {
        &self.best
    }

    pub fn best_length(&self) -> u64 {
        self.best_length
    }

    /// The best-ever trail was replaced during this tick.
    pub fn improved(&self) -> bool {
        self.improved
    }
}
