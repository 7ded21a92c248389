use antgraph::config::args::Args;
use antgraph::error::AcoResult;
use antgraph::report::run_headless;
use antgraph::scenario::scenario::Scenario;
use antgraph::simulation::engine::AcoEngine;
use antgraph::tui::app::App;
use antgraph::tui::draw::draw_app;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.tui);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(&format!("\n  caused by: {}", cause));
                source = cause.source();
            }
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Failures are printed once by `main`, so the engine's own abort event is
/// only shown when asked for through `RUST_LOG`.
fn default_filter(tui: bool) -> &'static str {
    if tui { "off" } else { "error" }
}

fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(tui)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> AcoResult<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let scenario = args.scenario(seed);
    info!(scenario = scenario.name(), seed, "building graph");

    let graph = scenario.build()?;
    let mut engine = AcoEngine::new(graph, args.params(), StdRng::seed_from_u64(seed))?;

    if args.tui {
        run_tui(engine, scenario.name())
    } else {
        run_headless(&mut engine, scenario.name(), seed, &mut io::stdout().lock())
    }
}

fn run_tui(engine: AcoEngine, scenario: &str) -> AcoResult<()> {
    let mut terminal = ratatui::init();
    let mut app = App::new(engine, scenario);

    loop {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') =>
                {
                    break;
                }
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char(' ') =>
                {
                    app.step()
                }
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('r') =>
                {
                    app.toggle_auto_run()
                }
                _ => {}
            }
        }
        app.tick();
    }

    let best = app.engine.best().clone();
    let trail = best
        .trail()
        .iter()
        .map(|&v| app.engine.graph().label(v))
        .collect::<Vec<String>>()
        .join(" ");
    drop(app);
    println!("Best trail found: {}", trail);
    println!("Length of best trail found: {}", best.length());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_hides_abort_warning() {
        assert_eq!(default_filter(true), "off");
        assert_eq!(default_filter(false), "error");
        let filter = EnvFilter::new(default_filter(false));
        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::ERROR));
    }
}
