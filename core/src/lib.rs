//! Maximum flow over undirected capacitated networks
//!
//! `FlowEdge` carries one signed flow value against a fixed reference
//! direction, `FlowNetwork` holds named nodes and their insertion-ordered
//! incident edges and finds shortest residual paths, and `MaxFlowSolver`
//! runs Edmonds-Karp on top of both.
//!
//! ```
//! use edmonds_core::{FlowNetwork, MaxFlowSolver};
//!
//! let mut network = FlowNetwork::diamond(4).unwrap();
//! assert_eq!(MaxFlowSolver::new().compute_max_flow(&mut network), 8);
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod error;
pub mod io;
pub mod report;

pub use algorithm::graph::max_flow::{FlowMetrics, FlowPath, MaxFlowResult, MaxFlowSolver, SolverConfig};
pub use algorithm::traits::{Algorithm, EdgeId, NodeId};
pub use data_structures::{
    AugmentingPath, Capacity, EdgeSpec, Flow, FlowEdge, FlowNetwork, MinCut, MAX_CAPACITY,
};
pub use error::{FlowError, FlowResult};
pub use io::edge_list::{load_network, parse_edge_list, read_edge_list};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
