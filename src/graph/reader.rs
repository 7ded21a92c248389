use crate::error::{AcoError, AcoResult};
use crate::graph::graph::WeightedGraph;
use crate::graph::vertex::Vertex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Reads a graph in the city-list format:
///
/// ```text
/// 4
/// 0 Lisbon
/// 1 Porto
/// 2 Braga
/// 3 Faro
/// 1 2 3
/// 4 5
/// 6
/// ```
///
/// The first line is the vertex count, followed by one `index name` line per
/// vertex and the upper triangle of the weight matrix, one row per vertex
/// except the last.
pub fn read_graph(path: &Path) -> AcoResult<WeightedGraph> {
    let content = fs::read_to_string(path)?;
    parse_graph(&content)
}

pub fn parse_graph(content: &str) -> AcoResult<WeightedGraph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, header) = lines
        .next()
        .ok_or_else(|| AcoError::malformed("input is empty"))?;
    let size: usize = parse_token(header, line, "vertex count")?;

    // the count is untrusted, so nothing is preallocated from it
    let mut vertices = Vec::new();
    for _ in 0..size {
        let (line, text) = lines.next().ok_or_else(|| {
            AcoError::malformed(format!(
                "expected {} vertex lines but found {}",
                size,
                vertices.len()
            ))
        })?;
        let mut tokens = text.split_whitespace();
        let index: usize = parse_token(tokens.next().unwrap_or(""), line, "vertex index")?;
        let name = tokens
            .next()
            .ok_or_else(|| AcoError::malformed_line(line, "vertex name is missing"))?;
        if tokens.next().is_some() {
            return Err(AcoError::malformed_line(
                line,
                "vertex line has more than two fields",
            ));
        }
        vertices.push(Vertex::new(index, name));
    }

    let expected_rows = size.saturating_sub(1);
    let mut rows = Vec::new();
    for (line, text) in lines {
        let row = rows.len();
        if row >= expected_rows {
            return Err(AcoError::malformed_line(
                line,
                format!("unexpected weight row, only {} expected", expected_rows),
            ));
        }
        let weights = text
            .split_whitespace()
            .map(|t| parse_token::<u32>(t, line, "weight"))
            .collect::<AcoResult<Vec<u32>>>()?;
        let capacity = size - row - 1;
        if weights.len() > capacity {
            return Err(AcoError::malformed_line(
                line,
                format!(
                    "weight row {} has {} entries, at most {} expected",
                    row,
                    weights.len(),
                    capacity
                ),
            ));
        }
        rows.push(weights);
    }

    WeightedGraph::from_rows(size, vertices, rows)
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> AcoResult<T> {
    token
        .parse()
        .map_err(|_| AcoError::malformed_line(line, format!("invalid {}: `{}`", what, token)))
}
