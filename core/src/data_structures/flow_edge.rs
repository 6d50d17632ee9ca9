//! Undirected flow edge with direction-relative signed flow
//!
//! An edge stores one capacity and one signed flow value measured along its
//! reference direction `from -> to`. Every query takes an explicit
//! `(from, to)` pair; any pair other than the exact reference pair is read
//! as the reverse direction.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::NodeId;
use crate::error::{FlowError, FlowResult};

/// Flow capacity type
pub type Capacity = i64;

/// Signed flow value, positive along the edge's reference direction
pub type Flow = i64;

/// Largest capacity an edge, or a whole network, may carry. Residuals
/// reach `2 * capacity`, so this keeps every residual, flow total and cut
/// sum inside `Capacity`.
pub const MAX_CAPACITY: Capacity = Capacity::MAX / 2;

/// Flow edge shared by the adjacency lists of both endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    from: NodeId,
    to: NodeId,
    capacity: Capacity,
    flow: Flow,
}

impl FlowEdge {
    /// Create new flow edge with zero flow
    pub fn new(from: NodeId, to: NodeId, capacity: Capacity) -> Self {
        debug_assert!(
            (0..=MAX_CAPACITY).contains(&capacity),
            "capacity must be within 0..=MAX_CAPACITY"
        );
        Self {
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    /// First endpoint; flow leaving it is positive
    #[inline]
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Second endpoint; flow arriving at it is positive
    #[inline]
    pub fn to(&self) -> NodeId {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Raw flow along the reference direction
    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Returns the endpoint opposite `node`. The error names arena ids;
    /// `FlowNetwork::other_end` reports node names instead.
    pub fn other_end(&self, node: NodeId) -> FlowResult<NodeId> {
        if node == self.from {
            Ok(self.to)
        } else if node == self.to {
            Ok(self.from)
        } else {
            Err(FlowError::InvalidEndpoint {
                node: node.to_string(),
                edge: self.to_string(),
            })
        }
    }

    /// `1` for the reference direction, `-1` for anything else
    #[inline]
    pub fn direction(&self, from: NodeId, to: NodeId) -> Flow {
        if self.from == from && self.to == to {
            1
        } else {
            -1
        }
    }

    /// Flow currently travelling from `from` to `to`
    #[inline]
    pub fn flow_toward(&self, from: NodeId, to: NodeId) -> Flow {
        self.direction(from, to) * self.flow
    }

    /// Additional flow that can still be pushed from `from` to `to`.
    /// Always within `[0, 2 * capacity]`.
    #[inline]
    pub fn residual(&self, from: NodeId, to: NodeId) -> Capacity {
        self.capacity - self.flow_toward(from, to)
    }

    /// Adds `delta` units of flow in the `from -> to` direction.
    ///
    /// The caller guarantees `delta <= residual(from, to)`; nothing is
    /// clamped here.
    pub fn apply_delta(&mut self, from: NodeId, to: NodeId, delta: Flow) {
        self.flow += self.direction(from, to) * delta;
        debug_assert!(
            self.satisfies_capacity(),
            "flow {} exceeds capacity {} on {}",
            self.flow,
            self.capacity,
            self
        );
    }

    /// `-capacity <= flow <= capacity`
    #[inline]
    pub fn satisfies_capacity(&self) -> bool {
        self.flow.abs() <= self.capacity
    }

    /// Zero the flow, keeping topology and capacity
    pub fn reset(&mut self) {
        self.flow = 0;
    }
}

/// Arena-id rendering for debugging; `report::EdgeDisplay` shows node names
impl fmt::Display for FlowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}==>{}/{}==>{}]",
            self.from, self.flow, self.capacity, self.to
        )
    }
}
