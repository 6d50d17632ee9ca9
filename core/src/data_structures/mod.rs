//! Flow network data structures
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod flow_edge;
pub mod flow_network;

pub use self::flow_edge::{Capacity, Flow, FlowEdge, MAX_CAPACITY};
pub use self::flow_network::{AugmentingPath, EdgeSpec, FlowNetwork, MinCut};
