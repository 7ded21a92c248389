use crate::error::AcoResult;
use crate::graph::graph::WeightedGraph;

/// Source of the graph a colony runs on.
pub trait Scenario {
    fn name(&self) -> &str;
    fn build(&self) -> AcoResult<WeightedGraph>;
}
