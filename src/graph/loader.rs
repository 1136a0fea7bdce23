//! METIS adjacency-format reader.
//!
//! ```text
//! % comment
//! n m [fmt [ncon]]
//! <neighbors of node 1>
//! <neighbors of node 2>
//! ...
//! ```
//!
//! Node ids are the 1-based line positions. `fmt` is up to three binary
//! digits: vertex sizes (hundreds), vertex weights (tens) and edge weights
//! (units). Weights are parsed and dropped; the partitioner only needs
//! topology. Every node starts with color 0.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::types::{Graph, Node, NodeId};
use crate::error::{JabejaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    nodes: usize,
    edges: usize,
    vertex_sizes: bool,
    vertex_weights: usize,
    edge_weights: bool,
}

/// Reads a METIS graph file.
pub fn load_metis(path: impl AsRef<Path>) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    parse_metis(BufReader::new(file))
}

/// Parses METIS adjacency data from any buffered reader.
pub fn parse_metis<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_line, header) = loop {
        match lines.next() {
            Some((no, line)) => {
                let line = line?;
                if is_comment(&line) || line.trim().is_empty() {
                    continue;
                }
                break (no, parse_header(no, &line)?);
            }
            None => return Err(parse_error(0, "missing header line")),
        }
    };

    let mut nodes = Vec::with_capacity(header.nodes);
    let mut last_line = header_line;
    while nodes.len() < header.nodes {
        let Some((no, line)) = lines.next() else {
            return Err(parse_error(
                last_line,
                format!(
                    "expected {} adjacency lines, found {}",
                    header.nodes,
                    nodes.len()
                ),
            ));
        };
        let line = line?;
        last_line = no;
        if is_comment(&line) {
            continue;
        }
        let id = nodes.len() + 1;
        let neighbors = parse_adjacency(no, &line, &header)?;
        nodes.push(Node::new(id, 0, neighbors));
    }

    let graph = Graph::from_nodes(nodes)?;
    if graph.edge_count() != header.edges {
        tracing::warn!(
            declared = header.edges,
            found = graph.edge_count(),
            "edge count in header does not match adjacency lists"
        );
    }
    Ok(graph)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('%')
}

fn parse_error(line: usize, message: impl Into<String>) -> JabejaError {
    JabejaError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_number(line: usize, token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("expected a non-negative integer, got {token:?}")))
}

fn parse_header(line: usize, text: &str) -> Result<Header> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 || tokens.len() > 4 {
        return Err(parse_error(line, "header must be `n m [fmt [ncon]]`"));
    }
    let nodes = parse_number(line, tokens[0])?;
    let edges = parse_number(line, tokens[1])?;

    let fmt = tokens.get(2).copied().unwrap_or("0");
    if fmt.len() > 3 || !fmt.chars().all(|c| c == '0' || c == '1') {
        return Err(parse_error(line, format!("invalid fmt field {fmt:?}")));
    }
    let flag = |pos: usize| fmt.len() > pos && fmt.as_bytes()[fmt.len() - 1 - pos] == b'1';
    let ncon = match tokens.get(3) {
        Some(t) => parse_number(line, t)?,
        None => 1,
    };

    Ok(Header {
        nodes,
        edges,
        vertex_sizes: flag(2),
        vertex_weights: if flag(1) { ncon } else { 0 },
        edge_weights: flag(0),
    })
}

fn parse_adjacency(line: usize, text: &str, header: &Header) -> Result<Vec<NodeId>> {
    let tokens: Vec<usize> = text
        .split_whitespace()
        .map(|t| parse_number(line, t))
        .collect::<Result<_>>()?;

    let skip = usize::from(header.vertex_sizes) + header.vertex_weights;
    if tokens.len() < skip {
        return Err(parse_error(line, "missing vertex size or weight"));
    }
    let rest = &tokens[skip..];

    let neighbors: Vec<NodeId> = if header.edge_weights {
        if rest.len() % 2 != 0 {
            return Err(parse_error(line, "neighbor without edge weight"));
        }
        rest.chunks_exact(2).map(|pair| pair[0]).collect()
    } else {
        rest.to_vec()
    };

    if let Some(&bad) = neighbors.iter().find(|&&n| n == 0 || n > header.nodes) {
        return Err(parse_error(
            line,
            format!("neighbor id {bad} outside 1..={}", header.nodes),
        ));
    }
    Ok(neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::tempdir;

    fn parse(text: &str) -> Result<Graph> {
        parse_metis(Cursor::new(text))
    }

    #[test]
    fn test_parse_cycle() {
        let g = parse("% a 4-cycle\n4 4\n2 4\n1 3\n2 4\n3 1\n").unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.node_ids(), &[1, 2, 3, 4]);
        assert_eq!(g.neighbors_of(1), &[2, 4]);
        assert_eq!(g.edge_count(), 4);
        assert!(g.nodes().iter().all(|n| n.color() == 0));
    }

    #[test]
    fn test_blank_line_is_isolated_node() {
        let g = parse("3 1\n2\n1\n\n").unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.neighbors_of(3).is_empty());
    }

    #[test]
    fn test_comments_between_adjacency_lines() {
        let g = parse("2 1\n2\n% skipped\n1\n").unwrap();
        assert_eq!(g.neighbors_of(2), &[1]);
    }

    #[test]
    fn test_edge_and_vertex_weights_dropped() {
        // fmt 011: one vertex weight, then (neighbor, weight) pairs.
        let g = parse("3 2 011\n5 2 7\n5 1 7 3 9\n5 2 9\n").unwrap();
        assert_eq!(g.neighbors_of(1), &[2]);
        assert_eq!(g.neighbors_of(2), &[1, 3]);
        assert_eq!(g.neighbors_of(3), &[2]);
    }

    #[test]
    fn test_multiple_vertex_weights() {
        let g = parse("2 1 10 2\n4 4 2\n4 4 1\n").unwrap();
        assert_eq!(g.neighbors_of(1), &[2]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let g = parse("2 2\n2 2\n1 1\n").unwrap();
        assert_eq!(g.neighbors_of(1), &[2, 2]);
        assert_eq!(g.degree_by_color(1, 0), 2);
    }

    #[test]
    fn test_out_of_range_neighbor() {
        let err = parse("2 1\n3\n1\n").unwrap_err();
        assert!(matches!(err, JabejaError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_lines() {
        let err = parse("3 1\n2\n1\n").unwrap_err();
        assert!(matches!(err, JabejaError::Parse { .. }));
    }

    #[test]
    fn test_bad_token() {
        assert!(parse("2 1\nx\n1\n").is_err());
        assert!(parse("2 1 2\n2\n1\n").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_odd_weighted_line() {
        assert!(parse("2 1 1\n2\n1 1\n").is_err());
    }

    #[test]
    fn test_load_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("tri.graph");
        let mut file = File::create(&path)?;
        write!(file, "3 3\n2 3\n1 3\n1 2\n")?;

        let g = load_metis(&path)?;
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 3);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_metis("/nonexistent/jabeja/graph").unwrap_err();
        assert!(matches!(err, JabejaError::Io(_)));
    }
}
