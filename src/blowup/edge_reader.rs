use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use anyhow::Context;
use itertools::Itertools;
use tracing::{debug, trace};

use super::graph::*;

pub type Result<T> = std::io::Result<T>;

/// Streams edges out of a plain text edge list: one `u v` pair per line,
/// blank lines and `#` comments ignored.
pub struct EdgeReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> EdgeReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for EdgeReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

fn invalid_data(line_number: usize, info: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(ErrorKind::InvalidData, format!("Line {line_number}: {info}"))
}

fn parse_node(token: &str, name: &str, line_number: usize) -> Result<Node> {
    token
        .parse::<Node>()
        .map_err(|_| invalid_data(line_number, format!("cannot parse {name} from {token:?}.")))
}

impl<R: BufRead> EdgeReader<R> {
    fn next_content_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    self.line_number += 1;
                    let trimmed = line.trim_start();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        trace!(line = self.line_number, "skip");
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_content_line()? else {
            return Ok(None);
        };

        let (from, dest) = line
            .split_whitespace()
            .collect_tuple::<(_, _)>()
            .ok_or_else(|| {
                invalid_data(
                    self.line_number,
                    format!("expected exactly two vertices, found {line:?}."),
                )
            })?;

        let from = parse_node(from, "source node", self.line_number)?;
        let dest = parse_node(dest, "target node", self.line_number)?;

        Ok(Some(Edge(from, dest)))
    }
}

pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    EdgeReader::new(reader).collect()
}

pub fn read_edges_from_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<Edge>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let edges = read_edges(BufReader::new(file))
        .with_context(|| format!("Cannot read edges from {}", path.display()))?;

    debug!("Read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}
