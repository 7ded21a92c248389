pub mod edge;
pub mod graph;
pub mod reader;
pub mod vertex;
