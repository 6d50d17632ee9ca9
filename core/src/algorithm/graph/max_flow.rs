//! Edmonds-Karp maximum flow
//!
//! Repeatedly asks the network for a shortest residual path, pushes the
//! path's bottleneck along it and accumulates the pushed amount until no
//! path remains. Because every path is a BFS shortest path, the number of
//! augmentations is bounded by O(V * E) and each augmentation costs O(E).
//!
//! The solver is the only writer of edge flows while it runs; it never
//! pushes more than the bottleneck it has just measured, which keeps every
//! edge within `-capacity <= flow <= capacity`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmParameter, ParameterType};
use crate::data_structures::flow_edge::{Capacity, Flow};
use crate::data_structures::flow_network::{AugmentingPath, FlowNetwork};
use crate::error::{FlowError, FlowResult};
use crate::report::EdgeDisplay;

const RECORD_AUGMENTATIONS: &str = "record_augmentations";
const VERIFY_INVARIANTS: &str = "verify_invariants";

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Keep every augmenting path and its bottleneck in the result
    pub record_augmentations: bool,
    /// Check the capacity invariant over all edges after each augmentation
    pub verify_invariants: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            record_augmentations: true,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

/// One augmentation: the path tried and the amount pushed along it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPath {
    /// Path vertices, source first
    pub path: Vec<String>,
    /// Flow amount along path
    pub flow: Flow,
}

/// Flow algorithm performance metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Number of augmenting paths saturated
    pub augmentations: usize,
    /// Number of breadth-first searches, including the final failed one
    pub bfs_searches: usize,
    /// Nodes expanded across all searches
    pub nodes_explored: usize,
    /// Algorithm execution time
    pub execution_time_ms: f64,
}

/// Maximum flow result with detailed flow information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Maximum flow value
    pub max_flow: Flow,
    /// Augmenting paths in discovery order (empty unless recorded)
    pub flow_paths: Vec<FlowPath>,
    /// Source side of a minimum cut
    pub min_cut: Vec<String>,
    pub metrics: FlowMetrics,
}

/// Edmonds-Karp maximum flow solver
#[derive(Debug, Clone, Default)]
pub struct MaxFlowSolver {
    config: SolverConfig,
}

impl MaxFlowSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve in place and return just the flow value
    pub fn compute_max_flow(&self, network: &mut FlowNetwork) -> Flow {
        self.solve(network).max_flow
    }

    /// Saturate augmenting paths until none remain. Edge flows of `network`
    /// hold the final assignment afterwards.
    pub fn solve(&self, network: &mut FlowNetwork) -> MaxFlowResult {
        let start = Instant::now();
        info!(
            "Solving max flow from {} to {} ({} nodes, {} edges)",
            network.node_name(network.source()),
            network.node_name(network.sink()),
            network.node_count(),
            network.edge_count()
        );

        let mut max_flow: Flow = 0;
        let mut flow_paths = Vec::new();
        let mut metrics = FlowMetrics::default();

        loop {
            let (path, explored) = network.find_augmenting_path_counted();
            metrics.bfs_searches += 1;
            metrics.nodes_explored += explored;

            let Some(path) = path else {
                break;
            };

            let bottleneck = Self::bottleneck(network, &path);
            debug_assert!(bottleneck > 0, "augmenting path with zero bottleneck");
            Self::augment(network, &path, bottleneck);

            let names = network.path_names(&path);
            debug!("Trying {}; adding {} to path.", names.join("->"), bottleneck);

            if self.config.verify_invariants {
                if let Some(edge) = network.check_capacity_invariant() {
                    panic!(
                        "capacity invariant violated on edge {} after augmenting {}",
                        EdgeDisplay::new(network, edge, true),
                        names.join("->")
                    );
                }
            }

            if self.config.record_augmentations {
                flow_paths.push(FlowPath {
                    path: names.into_iter().map(str::to_owned).collect(),
                    flow: bottleneck,
                });
            }
            metrics.augmentations += 1;
            max_flow += bottleneck;
        }

        let min_cut = network
            .min_cut()
            .source_side
            .into_iter()
            .map(|id| network.node_name(id).to_owned())
            .collect();
        metrics.execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "Max flow {} after {} augmentations",
            max_flow, metrics.augmentations
        );
        MaxFlowResult {
            max_flow,
            flow_paths,
            min_cut,
            metrics,
        }
    }

    /// Smallest residual capacity along the path, re-read from the edges
    fn bottleneck(network: &FlowNetwork, path: &AugmentingPath) -> Capacity {
        path.hops()
            .map(|(u, v, edge)| network.edge(edge).residual(u, v))
            .min()
            .unwrap_or(0)
    }

    fn augment(network: &mut FlowNetwork, path: &AugmentingPath, amount: Flow) {
        for (u, v, edge) in path.hops() {
            network.edge_mut(edge).apply_delta(u, v, amount);
        }
    }
}

fn parse_bool(name: &str, value: &str) -> FlowResult<bool> {
    value.parse::<bool>().map_err(|_| FlowError::InvalidParameter {
        name: name.to_string(),
        reason: format!("expected true or false, got {}", value),
    })
}

impl Algorithm for MaxFlowSolver {
    fn name(&self) -> &'static str {
        "Edmonds-Karp"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        "Maximum flow by repeated saturation of shortest residual paths found with \
         breadth-first search; O(V * E^2) time, O(V + E) extra space."
            .to_string()
    }

    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter {
                name: RECORD_AUGMENTATIONS.to_string(),
                value: self.config.record_augmentations.to_string(),
                value_type: ParameterType::Boolean,
            },
            AlgorithmParameter {
                name: VERIFY_INVARIANTS.to_string(),
                value: self.config.verify_invariants.to_string(),
                value_type: ParameterType::Boolean,
            },
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> FlowResult<()> {
        match name {
            RECORD_AUGMENTATIONS => {
                self.config.record_augmentations = parse_bool(name, value)?;
                Ok(())
            }
            VERIFY_INVARIANTS => {
                self.config.verify_invariants = parse_bool(name, value)?;
                Ok(())
            }
            _ => Err(FlowError::InvalidParameter {
                name: name.to_string(),
                reason: "unknown parameter".to_string(),
            }),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            RECORD_AUGMENTATIONS => Some(self.config.record_augmentations.to_string()),
            VERIFY_INVARIANTS => Some(self.config.verify_invariants.to_string()),
            _ => None,
        }
    }
}
