use crate::simulation::engine::AcoEngine;
use std::error::Error;

pub struct App {
    pub engine: AcoEngine,
    pub auto_run: bool,
    scenario: String,
    last_error: Option<String>,
}

impl App {
    pub fn new(engine: AcoEngine, scenario: impl Into<String>) -> Self {
        Self {
            engine,
            auto_run: false,
            scenario: scenario.into(),
            last_error: None,
        }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Advances one tick, keeping the error chain for display.
    pub fn step(&mut self) {
        if let Err(err) = self.engine.step() {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            self.last_error = Some(message);
            self.auto_run = false;
        }
    }

    pub fn toggle_auto_run(&mut self) {
        self.auto_run = !self.auto_run && !self.engine.is_terminated();
    }

    pub fn tick(&mut self) {
        if self.auto_run {
            self.step();
            if self.engine.is_terminated() {
                self.auto_run = false;
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
