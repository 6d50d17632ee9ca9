//! Flow network over named nodes with breadth-first augmenting-path search
//!
//! Nodes are interned into an arena in first-appearance order and each node
//! keeps the ids of its incident edges in insertion order. Edges live in a
//! separate arena, so one `FlowEdge` is visible from both endpoints and a
//! flow update through either view is seen by the other. Insertion order is
//! the BFS tie-break, which makes every search reproducible.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{EdgeId, NodeId};
use crate::data_structures::flow_edge::{Capacity, Flow, FlowEdge, MAX_CAPACITY};
use crate::error::{FlowError, FlowResult};
use crate::report::EdgeDisplay;

/// Unresolved edge description `(endA, endB, capacity)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub capacity: Capacity,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }
}

/// Sequence of nodes from source to sink, each consecutive pair joined by
/// an edge with positive residual capacity when the path was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    nodes: Vec<NodeId>,
    /// Edge taken for each hop; `edges[i]` joins `nodes[i]` and `nodes[i + 1]`
    edges: Vec<EdgeId>,
}

impl AugmentingPath {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(u, v, edge)` hops along the path
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId, EdgeId)> + '_ {
        self.nodes
            .windows(2)
            .zip(&self.edges)
            .map(|(pair, &edge)| (pair[0], pair[1], edge))
    }
}

/// Source side of a minimum cut and the edges leaving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    pub source_side: Vec<NodeId>,
    pub cut_edges: Vec<EdgeId>,
    pub capacity: Capacity,
}

/// Result of one breadth-first search over the residual graph
#[derive(Debug)]
pub(crate) struct ResidualSearch {
    pub reached: Vec<bool>,
    /// Node and edge through which each reached node was first discovered
    pub predecessor: Vec<Option<(NodeId, EdgeId)>>,
    pub explored: usize,
}

impl ResidualSearch {
    fn reached(&self, node: NodeId) -> bool {
        self.reached[node.as_usize()]
    }
}

/// Flow network representation with residual queries
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    /// Node names in first-appearance order
    names: Vec<String>,
    /// Name lookup into the node arena
    index: HashMap<String, NodeId>,
    /// Incident edge ids per node, in insertion order
    adjacency: Vec<Vec<EdgeId>>,
    /// All edges in the network
    edges: Vec<FlowEdge>,
    source: NodeId,
    sink: NodeId,
}

impl FlowNetwork {
    /// Build a network from `(endA, endB, capacity)` triples.
    ///
    /// Every name mentioned by an edge becomes a node. Repeated pairs give
    /// independent edges. Fails without returning a partial network if an
    /// edge is malformed, the capacities sum past `MAX_CAPACITY`, or
    /// `source`/`sink` are equal or not present. Equal endpoints are
    /// rejected before any edge is looked at.
    pub fn new<I>(edges: I, source: &str, sink: &str) -> FlowResult<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        if source == sink {
            return Err(FlowError::InvalidEndpoints(format!(
                "source and sink are the same: {}",
                sink
            )));
        }

        let mut total: Capacity = 0;
        let mut network = Self {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            source: NodeId(0),
            sink: NodeId(0),
        };

        for (position, spec) in edges.into_iter().enumerate() {
            let line = position + 1;
            if spec.from.is_empty() || spec.to.is_empty() {
                return Err(FlowError::malformed(line, "empty node name"));
            }
            if spec.capacity < 0 {
                return Err(FlowError::malformed(
                    line,
                    format!("negative capacity {}", spec.capacity),
                ));
            }
            total = total
                .checked_add(spec.capacity)
                .filter(|&sum| sum <= MAX_CAPACITY)
                .ok_or_else(|| {
                    FlowError::malformed(
                        line,
                        format!("total capacity exceeds {}", MAX_CAPACITY),
                    )
                })?;
            network.add_edge(&spec.from, &spec.to, spec.capacity);
        }
        network.source = network.lookup(source, "source")?;
        network.sink = network.lookup(sink, "sink")?;

        debug!(
            "Built flow network: {} nodes, {} edges, source={}, sink={}",
            network.node_count(),
            network.edge_count(),
            source,
            sink
        );
        Ok(network)
    }

    /// The fixed four-node demo network: edges A-B, A-C, B-C, D-B and D-C
    /// of equal capacity, source A, sink D.
    ///
    /// ```text
    ///        B
    ///      / | \
    ///     A  |  D
    ///      \ | /
    ///        C
    /// ```
    pub fn diamond(capacity: Capacity) -> FlowResult<Self> {
        let edges = [("A", "B"), ("A", "C"), ("B", "C"), ("D", "B"), ("D", "C")]
            .into_iter()
            .map(|(from, to)| EdgeSpec::new(from, to, capacity));
        Self::new(edges, "A", "D")
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len());
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn add_edge(&mut self, from: &str, to: &str, capacity: Capacity) {
        let from = self.intern(from);
        let to = self.intern(to);
        let id = EdgeId(self.edges.len());
        self.edges.push(FlowEdge::new(from, to, capacity));

        // A self-loop sits once in its node's incidence list
        self.adjacency[from.as_usize()].push(id);
        if from != to {
            self.adjacency[to.as_usize()].push(id);
        }
    }

    fn lookup(&self, name: &str, role: &str) -> FlowResult<NodeId> {
        self.node_id(name).ok_or_else(|| {
            FlowError::InvalidEndpoints(format!("{} {} is not in the graph", role, name))
        })
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Name of a node of this network
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.names[node.as_usize()]
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId(i), name.as_str()))
    }

    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id.as_usize()]
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut FlowEdge {
        &mut self.edges[id.as_usize()]
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &FlowEdge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Ids of the edges incident to `node`, in insertion order
    pub fn edge_ids_at(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency[node.as_usize()]
    }

    /// Edges incident to `node`, in insertion order
    pub fn edges_at(&self, node: NodeId) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.edge_ids_at(node).iter().map(move |&id| self.edge(id))
    }

    /// Endpoint of `edge` opposite `node`. Only called with an edge taken
    /// from `node`'s own incidence list, so `node` is always an endpoint.
    #[inline]
    fn neighbor(edge: &FlowEdge, node: NodeId) -> NodeId {
        if edge.from() == node {
            edge.to()
        } else {
            edge.from()
        }
    }

    /// Endpoint of `edge` opposite `node`, with node names in the error
    pub fn other_end(&self, edge: EdgeId, node: NodeId) -> FlowResult<NodeId> {
        let flow_edge = self.edge(edge);
        flow_edge.other_end(node).map_err(|_| FlowError::InvalidEndpoint {
            node: self
                .names
                .get(node.as_usize())
                .cloned()
                .unwrap_or_else(|| node.to_string()),
            edge: EdgeDisplay::new(self, edge, true).to_string(),
        })
    }

    /// First edge incident to `from` whose other end is `to`
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.edge_ids_at(from)
            .iter()
            .copied()
            .find(|&id| Self::neighbor(self.edge(id), from) == to)
    }

    /// Residual capacity from `from` to `to`, or 0 if the nodes are not
    /// adjacent
    pub fn residual_capacity(&self, from: NodeId, to: NodeId) -> Capacity {
        self.edge_between(from, to)
            .map(|id| self.edge(id).residual(from, to))
            .unwrap_or(0)
    }

    /// Breadth-first search from the source over edges with positive
    /// residual capacity. With `stop_at_sink` the search ends as soon as the
    /// sink is dequeued.
    pub(crate) fn residual_search(&self, stop_at_sink: bool) -> ResidualSearch {
        let mut reached = vec![false; self.node_count()];
        let mut predecessor = vec![None; self.node_count()];
        let mut queue = VecDeque::new();
        let mut explored = 0;

        reached[self.source.as_usize()] = true;
        queue.push_back(self.source);

        while let Some(current) = queue.pop_front() {
            if stop_at_sink && current == self.sink {
                break;
            }
            explored += 1;

            for &edge_id in self.edge_ids_at(current) {
                let edge = self.edge(edge_id);
                let next = Self::neighbor(edge, current);
                if reached[next.as_usize()] {
                    continue;
                }
                let residual = edge.residual(current, next);
                trace!(
                    "relax {} -> {}: residual {}",
                    self.node_name(current),
                    self.node_name(next),
                    residual
                );
                if residual > 0 {
                    reached[next.as_usize()] = true;
                    predecessor[next.as_usize()] = Some((current, edge_id));
                    queue.push_back(next);
                }
            }
        }

        ResidualSearch {
            reached,
            predecessor,
            explored,
        }
    }

    /// Shortest (fewest-edge) source-to-sink path with positive residual
    /// capacity on every hop, or `None` if the sink is unreachable.
    pub fn find_augmenting_path(&self) -> Option<AugmentingPath> {
        self.find_augmenting_path_counted().0
    }

    pub(crate) fn find_augmenting_path_counted(&self) -> (Option<AugmentingPath>, usize) {
        let search = self.residual_search(true);
        if !search.reached(self.sink) {
            debug!("No augmenting path after exploring {} nodes", search.explored);
            return (None, search.explored);
        }

        let mut nodes = vec![self.sink];
        let mut edges = Vec::new();
        let mut current = self.sink;
        // Only the source lacks a predecessor
        while let Some((previous, edge)) = search.predecessor[current.as_usize()] {
            edges.push(edge);
            nodes.push(previous);
            current = previous;
        }
        nodes.reverse();
        edges.reverse();

        debug!(
            "Found augmenting path of {} edges after exploring {} nodes",
            edges.len(),
            search.explored
        );
        (Some(AugmentingPath { nodes, edges }), search.explored)
    }

    /// Net flow leaving `node` over all of its incident edges
    pub fn net_outflow(&self, node: NodeId) -> Flow {
        self.edges_at(node)
            .map(|edge| edge.flow_toward(node, Self::neighbor(edge, node)))
            .sum()
    }

    /// Nodes reachable from the source in the residual graph, and the edges
    /// joining them to the rest of the network. After a max-flow solve the
    /// cut capacity equals the flow value.
    pub fn min_cut(&self) -> MinCut {
        let search = self.residual_search(false);
        let source_side: Vec<NodeId> = self
            .nodes()
            .map(|(id, _)| id)
            .filter(|&id| search.reached(id))
            .collect();

        let cut_edges: Vec<EdgeId> = self
            .edges()
            .filter(|(_, edge)| search.reached(edge.from()) != search.reached(edge.to()))
            .map(|(id, _)| id)
            .collect();
        let capacity = cut_edges.iter().map(|&id| self.edge(id).capacity()).sum();

        MinCut {
            source_side,
            cut_edges,
            capacity,
        }
    }

    /// Zero every edge's flow
    pub fn reset_flows(&mut self) {
        self.edges.iter_mut().for_each(FlowEdge::reset);
    }

    /// First edge whose flow exceeds its capacity in either direction
    pub fn check_capacity_invariant(&self) -> Option<EdgeId> {
        self.edges()
            .find(|(_, edge)| !edge.satisfies_capacity())
            .map(|(id, _)| id)
    }

    /// Names along a path, for reporting
    pub fn path_names<'a>(&'a self, path: &AugmentingPath) -> Vec<&'a str> {
        path.nodes().iter().map(|&id| self.node_name(id)).collect()
    }
}
