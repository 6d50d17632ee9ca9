//! Text rendering of network state for the diagnostic report
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use crate::algorithm::graph::max_flow::{FlowPath, MaxFlowResult};
use crate::algorithm::traits::EdgeId;
use crate::data_structures::flow_network::FlowNetwork;

/// Named rendering of one edge along its reference direction,
/// `[from==>flow/capacity==>to]`, or `[from==>flow==>to]` without capacity
pub struct EdgeDisplay<'a> {
    network: &'a FlowNetwork,
    edge: EdgeId,
    show_capacity: bool,
}

impl<'a> EdgeDisplay<'a> {
    pub fn new(network: &'a FlowNetwork, edge: EdgeId, show_capacity: bool) -> Self {
        Self {
            network,
            edge,
            show_capacity,
        }
    }
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = self.network.edge(self.edge);
        let from = self.network.node_name(edge.from());
        let to = self.network.node_name(edge.to());
        if self.show_capacity {
            write!(f, "[{}==>{}/{}==>{}]", from, edge.flow(), edge.capacity(), to)
        } else {
            write!(f, "[{}==>{}==>{}]", from, edge.flow(), to)
        }
    }
}

/// One line per node in insertion order: `name: [edge], [edge], ...`
pub struct NetworkListing<'a> {
    network: &'a FlowNetwork,
    show_capacity: bool,
}

impl<'a> NetworkListing<'a> {
    pub fn new(network: &'a FlowNetwork, show_capacity: bool) -> Self {
        Self {
            network,
            show_capacity,
        }
    }
}

impl fmt::Display for NetworkListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, name) in self.network.nodes() {
            write!(f, "{}: ", name)?;
            for (i, &edge) in self.network.edge_ids_at(node).iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", EdgeDisplay::new(self.network, edge, self.show_capacity))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for FlowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trying {}; adding {} to path.", self.path.join("->"), self.flow)
    }
}

/// Full text report: initial listing, progress lines, total and solution
pub fn render_report(initial: &FlowNetwork, solved: &FlowNetwork, result: &MaxFlowResult) -> String {
    let mut out = String::new();
    out.push_str("Initial Graph:\n\n");
    out.push_str(&NetworkListing::new(initial, true).to_string());
    out.push('\n');
    for path in &result.flow_paths {
        out.push_str(&path.to_string());
        out.push('\n');
    }
    out.push_str(&format!("Max flow is {}\n", result.max_flow));
    out.push_str("\nSolution:\n\n");
    out.push_str(&NetworkListing::new(solved, false).to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::MaxFlowSolver;

    #[test]
    fn test_initial_listing() {
        let network = FlowNetwork::diamond(4).unwrap();
        let listing = NetworkListing::new(&network, true).to_string();
        let expected = "\
A: [A==>0/4==>B], [A==>0/4==>C]
B: [A==>0/4==>B], [B==>0/4==>C], [D==>0/4==>B]
C: [A==>0/4==>C], [B==>0/4==>C], [D==>0/4==>C]
D: [D==>0/4==>B], [D==>0/4==>C]
";
        assert_eq!(listing, expected);
    }

    #[test]
    fn test_solution_listing_shows_signed_flow() {
        let mut network = FlowNetwork::diamond(4).unwrap();
        MaxFlowSolver::new().compute_max_flow(&mut network);

        let listing = NetworkListing::new(&network, false).to_string();
        let first = listing.lines().next().unwrap();
        assert_eq!(first, "A: [A==>4==>B], [A==>4==>C]");
        // D is the reference `from` end, so flow into D is negative
        assert!(listing.contains("D: [D==>-4==>B], [D==>-4==>C]"));
    }

    #[test]
    fn test_render_report() {
        let initial = FlowNetwork::diamond(4).unwrap();
        let mut solved = initial.clone();
        let result = MaxFlowSolver::new().solve(&mut solved);

        let report = render_report(&initial, &solved, &result);
        assert!(report.starts_with("Initial Graph:\n\nA: "));
        assert!(report.contains("Trying A->B->D; adding 4 to path.\n"));
        assert!(report.contains("Trying A->C->D; adding 4 to path.\n"));
        assert!(report.contains("Max flow is 8\n\nSolution:\n\n"));
    }
}
