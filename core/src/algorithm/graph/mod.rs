//! Graph flow algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod max_flow;

pub use self::max_flow::{FlowMetrics, FlowPath, MaxFlowResult, MaxFlowSolver, SolverConfig};
