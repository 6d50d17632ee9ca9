use edmonds_core::{EdgeSpec, FlowNetwork, MaxFlowSolver, SolverConfig};
use proptest::prelude::*;

const MAX_NODES: usize = 7;

/// Random network over `n0..n{k-1}` with source `n0` and sink `n{k-1}`.
/// A zero-capacity source-sink edge makes sure both endpoints exist.
fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (2..=MAX_NODES).prop_flat_map(|nodes| {
        let edge = (0..nodes, 0..nodes, 0i64..12);
        (Just(nodes), prop::collection::vec(edge, 0..16))
    })
}

fn build(nodes: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork {
    let mut specs: Vec<EdgeSpec> = edges
        .iter()
        .map(|&(a, b, cap)| EdgeSpec::new(format!("n{}", a), format!("n{}", b), cap))
        .collect();
    specs.push(EdgeSpec::new("n0", format!("n{}", nodes - 1), 0));
    FlowNetwork::new(specs, "n0", &format!("n{}", nodes - 1)).unwrap()
}

/// Smallest undirected cut separating n0 from the sink, by enumeration
fn brute_force_min_cut(nodes: usize, edges: &[(usize, usize, i64)]) -> i64 {
    let sink = nodes - 1;
    let inner = nodes - 2;
    (0u32..(1 << inner))
        .map(|mask| {
            let on_source_side =
                |v: usize| v == 0 || (v != sink && mask & (1 << (v - 1)) != 0);
            edges
                .iter()
                .filter(|&&(a, b, _)| on_source_side(a) != on_source_side(b))
                .map(|&(_, _, cap)| cap)
                .sum::<i64>()
        })
        .min()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn test_flow_matches_brute_force_min_cut((nodes, edges) in arb_network()) {
        let mut network = build(nodes, &edges);
        let value = MaxFlowSolver::new().compute_max_flow(&mut network);

        prop_assert_eq!(value, brute_force_min_cut(nodes, &edges));
        prop_assert_eq!(network.min_cut().capacity, value);
    }

    #[test]
    fn test_capacity_and_conservation((nodes, edges) in arb_network()) {
        let mut network = build(nodes, &edges);
        let solver = MaxFlowSolver::with_config(SolverConfig {
            record_augmentations: true,
            verify_invariants: true,
        });
        let result = solver.solve(&mut network);

        prop_assert!(network.check_capacity_invariant().is_none());
        prop_assert_eq!(-network.net_outflow(network.sink()), result.max_flow);
        prop_assert_eq!(network.net_outflow(network.source()), result.max_flow);
        for (node, _) in network.nodes() {
            if node != network.source() && node != network.sink() {
                prop_assert_eq!(network.net_outflow(node), 0);
            }
        }
    }

    #[test]
    fn test_augmentations_are_positive_and_sum_to_flow((nodes, edges) in arb_network()) {
        let mut network = build(nodes, &edges);
        let result = MaxFlowSolver::new().solve(&mut network);

        prop_assert!(result.flow_paths.iter().all(|p| p.flow > 0));
        prop_assert_eq!(result.flow_paths.iter().map(|p| p.flow).sum::<i64>(), result.max_flow);
        prop_assert_eq!(result.metrics.bfs_searches, result.metrics.augmentations + 1);
        prop_assert!(network.find_augmenting_path().is_none());
    }

    #[test]
    fn test_path_lengths_never_decrease((nodes, edges) in arb_network()) {
        let mut network = build(nodes, &edges);
        let result = MaxFlowSolver::new().solve(&mut network);

        let lengths: Vec<usize> = result.flow_paths.iter().map(|p| p.path.len()).collect();
        prop_assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_edge_antisymmetry((nodes, edges) in arb_network()) {
        let mut network = build(nodes, &edges);
        MaxFlowSolver::new().compute_max_flow(&mut network);

        for (_, edge) in network.edges() {
            let (a, b) = (edge.from(), edge.to());
            if a == b {
                continue;
            }
            prop_assert_eq!(edge.flow_toward(a, b), -edge.flow_toward(b, a));
            prop_assert_eq!(edge.residual(a, b) + edge.residual(b, a), 2 * edge.capacity());
        }
    }
}
