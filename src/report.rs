use crate::analysis::summary::{abbreviate_trail, summarize_ants};
use crate::colony::trail::cycle_length;
use crate::error::AcoResult;
use crate::simulation::engine::AcoEngine;
use crossterm::style::Stylize;
use std::io::Write;

/// Plain console rendition of a run: setup, initial colony, every new best
/// and the final trail.
pub fn run_headless<W: Write>(
    engine: &mut AcoEngine,
    scenario: &str,
    seed: u64,
    out: &mut W,
) -> AcoResult<()> {
    print_setup(engine, scenario, seed, out)?;
    print_ants(engine, out)?;
    writeln!(
        out,
        "{}",
        format!("\nBest initial trail length: {}", engine.best().length()).yellow()
    )?;

    writeln!(out, "{}", "\nEntering update ants / update pheromones loop\n".red())?;
    while !engine.is_terminated() {
        engine.step()?;
        let snapshot = engine.current_snapshot();
        if snapshot.improved() {
            writeln!(
                out,
                "{}",
                format!(
                    "New best length of {} found at time {}",
                    snapshot.best_length(),
                    snapshot.tick() - 1
                )
                .yellow()
            )?;
            writeln!(
                out,
                "  {}",
                abbreviate_trail(snapshot.best(), engine.graph()).cyan()
            )?;
        }
    }
    writeln!(out, "{}", "\nTime complete".red())?;

    print_result(engine, out)
}

fn print_setup<W: Write>(engine: &AcoEngine, scenario: &str, seed: u64, out: &mut W) -> AcoResult<()> {
    let params = engine.params();
    let lines = [
        format!("Ant colony optimization on `{}` (seed {})", scenario, seed),
        format!("\nNumber of cities = {}", engine.graph().vertex_count()),
        format!("Number of ants = {}", params.num_ants),
        format!("Maximum time = {}", params.max_time),
        format!("\nAlpha (pheromone influence) = {}", params.alpha),
        format!("Beta (local node influence) = {}", params.beta),
        format!("Rho (pheromone evaporation coefficient) = {:.2}", params.rho),
        format!("Q (pheromone deposit factor) = {:.2}", params.q),
    ];
    for line in lines {
        writeln!(out, "{}", line.yellow())?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_ants<W: Write>(engine: &AcoEngine, out: &mut W) -> AcoResult<()> {
    for row in summarize_ants(engine.ants(), engine.graph()) {
        writeln!(
            out,
            "{:>3}: [ {} ] len = {}",
            row.id(),
            row.trail().cyan(),
            row.length().to_string().green()
        )?;
    }
    Ok(())
}

fn print_result<W: Write>(engine: &AcoEngine, out: &mut W) -> AcoResult<()> {
    let best = engine.best();
    let graph = engine.graph();

    writeln!(out, "{}", "\nBest trail found:".yellow())?;
    for chunk in best.trail().chunks(5) {
        let names = chunk
            .iter()
            .map(|&v| graph.label(v))
            .collect::<Vec<String>>()
            .join(" ");
        writeln!(out, "{}", names.cyan())?;
    }
    writeln!(
        out,
        "{}",
        format!(
            "\nLength of best trail found: {} (closed tour {})",
            best.length(),
            cycle_length(best.trail(), graph)
        )
        .yellow()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::params::AcoParams;
    use crate::scenario::basic::BasicScenario;
    use crate::scenario::scenario::Scenario;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_headless_report() {
        let params = AcoParams {
            num_ants: 2,
            max_time: 20,
            ..AcoParams::default()
        };
        let graph = BasicScenario.build().unwrap();
        let mut engine = AcoEngine::new(graph, params, StdRng::seed_from_u64(5)).unwrap();
        let mut out = Vec::new();
        run_headless(&mut engine, "basic", 5, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(engine.is_terminated());
        assert!(text.contains("Number of cities = 4"));
        assert!(text.contains("Best initial trail length:"));
        assert!(text.contains("Time complete"));
        assert!(text.contains(&format!(
            "Length of best trail found: {} (closed tour 14)",
            engine.best().length()
        )));
    }
}
