use crate::error::AcoResult;
use crate::graph::graph::WeightedGraph;
use crate::graph::reader::read_graph;
use crate::scenario::scenario::Scenario;
use std::path::PathBuf;

pub struct FileScenario {
    path: PathBuf,
    name: String,
}

impl FileScenario {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Scenario for FileScenario {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self) -> AcoResult<WeightedGraph> {
        read_graph(&self.path)
    }
}
