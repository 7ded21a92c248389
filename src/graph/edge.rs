/// Undirected weighted edge between two distinct vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    /// weight > 0 for a usable graph
    weight: u32,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}
