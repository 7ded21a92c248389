//! Ant colony optimization for the symmetric travelling salesman problem.
//!
//! A [`simulation::engine::AcoEngine`] owns a [`graph::graph::WeightedGraph`],
//! a colony of [`colony::ant::Ant`]s and their shared
//! [`colony::pheromones::PheromoneMatrix`], and advances them one tick at a
//! time until its time budget is spent.

pub mod analysis;
pub mod colony;
pub mod config;
pub mod error;
pub mod graph;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod state;
pub mod tui;
