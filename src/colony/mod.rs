pub mod ant;
pub mod pheromones;
pub mod trail;
