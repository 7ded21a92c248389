use thiserror::Error;

pub type AcoResult<T> = Result<T, AcoError>;

#[derive(Debug, Error)]
pub enum AcoError {
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("malformed input at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Every candidate had zero desirability, so no distribution exists.
    #[error("degenerate distribution leaving vertex {from} at trail position {step}")]
    DegenerateDistribution { from: usize, step: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("{} failed at tick {tick}", ant.map(|a| format!("ant {a}")).unwrap_or_else(|| "pheromone update".to_string()))]
    Round {
        tick: usize,
        ant: Option<usize>,
        #[source]
        source: Box<AcoError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcoError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn malformed_line(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn in_round(self, tick: usize, ant: Option<usize>) -> Self {
        Self::Round {
            tick,
            ant,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_round_context_keeps_source() {
        let err = AcoError::DegenerateDistribution { from: 3, step: 1 }.in_round(7, Some(2));
        assert_eq!(err.to_string(), "ant 2 failed at tick 7");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("degenerate distribution leaving vertex 3 at trail position 1")
        );
    }

    #[test]
    fn test_round_context_without_ant() {
        let err = AcoError::malformed("zero length").in_round(0, None);
        assert_eq!(err.to_string(), "pheromone update failed at tick 0");
    }
}
