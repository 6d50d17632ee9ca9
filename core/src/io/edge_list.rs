//! Edge-list reader
//!
//! One edge per line, `<nodeA> <nodeB> <capacity>`, fields separated by
//! whitespace. The first field is the edge's reference `from` end. Blank
//! lines are skipped; there is no header and no comment syntax.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;

use log::debug;

use crate::data_structures::flow_edge::{Capacity, MAX_CAPACITY};
use crate::data_structures::flow_network::{EdgeSpec, FlowNetwork};
use crate::error::{FlowError, FlowResult};

/// Parse edge-list text into edge descriptions, in file order
pub fn parse_edge_list(text: &str) -> FlowResult<Vec<EdgeSpec>> {
    let mut edges = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [from, to, capacity] = fields[..] else {
            return Err(FlowError::malformed(
                line,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };
        let capacity: Capacity = capacity.parse().map_err(|_| {
            FlowError::malformed(line, format!("capacity {:?} is not an integer", capacity))
        })?;
        if capacity < 0 {
            return Err(FlowError::malformed(
                line,
                format!("negative capacity {}", capacity),
            ));
        }
        if capacity > MAX_CAPACITY {
            return Err(FlowError::malformed(
                line,
                format!("capacity {} exceeds {}", capacity, MAX_CAPACITY),
            ));
        }
        edges.push(EdgeSpec::new(from, to, capacity));
    }

    Ok(edges)
}

/// Read and parse an edge-list file
pub fn read_edge_list(path: impl AsRef<Path>) -> FlowResult<Vec<EdgeSpec>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let edges = parse_edge_list(&text)?;
    debug!("Read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Read an edge-list file and build its network
pub fn load_network(path: impl AsRef<Path>, source: &str, sink: &str) -> FlowResult<FlowNetwork> {
    let edges = read_edge_list(path)?;
    FlowNetwork::new(edges, source, sink)
}
