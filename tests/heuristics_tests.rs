use triangulum::*;
use triangulum::core::edit::Edit;
use triangulum::core::markov::markov_network;
use triangulum::heuristics::*;
use triangulum::triangulation::triangulate;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use assert_float_eq::*;
use paste::paste;

/// Random Bayesian network with `n` variables. Links go from lower to higher indexes, so the
/// network is acyclic.
fn random_network(seed: u64, n: usize, density: f64) -> (ProbNet, Vec<VariableIndex>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = ProbNet::new();
    let v = (0..n).map(|i| net.add_variable(Variable::chance(&format!("V{}", i), rng.gen_range(2..5)))).collect::<Vec<VariableIndex>>();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                net.add_link(v[i], v[j], true).unwrap();
            }
        }
    }
    (net, v)
}

/// Splits the variables in `k` phases of consecutive variables
fn phases(variables: &[VariableIndex], k: usize) -> Vec<Vec<VariableIndex>> {
    let size = variables.len().div_ceil(k);
    variables.chunks(size).map(|c| c.to_vec()).collect()
}

/// Eliminates every variable proposed by the heuristic on `network`, applying the fill-in and the
/// removal on it, and returns the order
fn eliminate_all(heuristic: &mut dyn EliminationHeuristic, network: &mut ProbNet) -> Vec<VariableIndex> {
    let mut order = vec![];
    while let Some(variable) = heuristic.variable_to_delete(network) {
        let node = network.node(variable).unwrap();
        let neighbors = network.graph().neighbors(node);
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if !network.graph().are_adjacent(neighbors[i], neighbors[j]) {
                    let (a, b) = (network.variable_of(neighbors[i]).unwrap(), network.variable_of(neighbors[j]).unwrap());
                    network.add_link(a, b, false).unwrap();
                    heuristic.variable_eliminated(&Edit::AddLink { from: a, to: b, directed: false });
                }
            }
        }
        network.remove_node(variable).unwrap();
        heuristic.variable_eliminated(&Edit::RemoveNode { variable });
        order.push(variable);
    }
    order
}

macro_rules! heuristic_tests {
    ($($name:ident: $heuristic:expr,)*) => {
        $(
            paste! {
                #[test]
                fn [<$name _proposition_is_idempotent>]() {
                    for seed in 0..10 {
                        let (net, v) = random_network(seed, 12, 0.3);
                        let markov = markov_network(&net);
                        let heuristic = HeuristicRegistry::default().create($heuristic.name(), &markov, vec![v.clone()]).unwrap();
                        let first = heuristic.variable_to_delete(&markov);
                        assert!(first.is_some());
                        assert_eq!(first, heuristic.variable_to_delete(&markov));
                        assert_eq!(first, heuristic.phases().last_proposed());
                    }
                }

                #[test]
                fn [<$name _eliminates_every_variable_phase_by_phase>]() {
                    for seed in 0..10 {
                        let (net, v) = random_network(seed, 15, 0.25);
                        let mut markov = markov_network(&net);
                        let phases = phases(&v, 3);
                        let mut heuristic = HeuristicRegistry::default().create($heuristic.name(), &markov, phases.clone()).unwrap();
                        assert_eq!(3, heuristic.number_phases());
                        let order = eliminate_all(heuristic.as_mut(), &mut markov);
                        assert_eq!(v.len(), order.len());
                        // The last phase is eliminated first
                        let mut expected = vec![];
                        for phase in phases.iter().rev() {
                            let mut eliminated = order[expected.len()..expected.len() + phase.len()].to_vec();
                            eliminated.sort();
                            assert_eq!(*phase, eliminated);
                            expected.extend(eliminated);
                        }
                        assert_eq!(0, heuristic.number_phases());
                        assert_eq!(None, heuristic.variable_to_delete(&markov));
                    }
                }

                #[test]
                fn [<$name _triangulation_is_chordal>]() {
                    for seed in 0..10 {
                        let (net, _) = random_network(seed, 15, 0.2);
                        let mut args = args::Args::default();
                        args.set_heuristic($heuristic);
                        let order = elimination_order(&args, &net).unwrap();
                        let triangulated = triangulated_graph(&args, &net).unwrap();
                        let mut eliminated: FxHashSet<NodeIndex> = FxHashSet::default();
                        for variable in order.iter().copied() {
                            let node = NodeIndex(variable.0);
                            let neighbors = triangulated.neighbors(node).into_iter().filter(|n| !eliminated.contains(n)).collect::<Vec<NodeIndex>>();
                            assert!(triangulated.is_clique(&neighbors));
                            eliminated.insert(node);
                        }
                    }
                }

                #[test]
                fn [<$name _out_of_phase_notifications_are_ignored>]() {
                    let (net, v) = random_network(42, 6, 0.4);
                    let markov = markov_network(&net);
                    let mut heuristic = HeuristicRegistry::default().create($heuristic.name(), &markov, vec![vec![v[0], v[1]], vec![v[2], v[3]]]).unwrap();
                    heuristic.variable_eliminated(&Edit::RemoveNode { variable: v[0] });
                    heuristic.variable_eliminated(&Edit::InvertLink { from: v[2], to: v[3] });
                    assert_eq!(2, heuristic.number_phases());
                    assert_eq!(Some(&[v[2], v[3]][..]), heuristic.phases().last_variables());
                }
            }
        )*
    }
}

heuristic_tests! {
    simple: Heuristic::Simple,
    minimal_fill_in: Heuristic::MinimalFillIn,
    cano_moral: Heuristic::CanoMoral,
}

#[test]
fn chain_simple_elimination_proposes_first_extremity() {
    let mut net = ProbNet::new();
    let v = ["A", "B", "C", "D"].iter().map(|n| net.add_variable(Variable::chance(n, 2))).collect::<Vec<VariableIndex>>();
    for i in 0..3 {
        net.add_link(v[i], v[i + 1], false).unwrap();
    }
    let heuristic = SimpleElimination::new(&net, vec![v.clone()]).unwrap();
    assert_eq!(Some(v[0]), heuristic.variable_to_delete(&net));
}

#[test]
fn star_minimal_fill_in_never_proposes_the_center() {
    let mut net = ProbNet::new();
    let x = net.add_variable(Variable::chance("X", 2));
    let leaves = ["L1", "L2", "L3"].iter().map(|n| net.add_variable(Variable::chance(n, 2))).collect::<Vec<VariableIndex>>();
    for leaf in leaves.iter().copied() {
        net.add_link(x, leaf, false).unwrap();
    }
    let heuristic = MinimalFillIn::new(&net, vec![vec![x, leaves[0], leaves[1], leaves[2]]]).unwrap();
    let proposed = heuristic.variable_to_delete(&net).unwrap();
    assert!(leaves.contains(&proposed));
    assert_eq!(3, heuristic.graph().fill_in(NodeIndex(x.0)));
}

#[test]
fn triangle_cano_moral_ratio() {
    let mut net = ProbNet::new();
    let v = [2, 3, 5].iter().enumerate().map(|(i, s)| net.add_variable(Variable::chance(&format!("V{}", i), *s))).collect::<Vec<VariableIndex>>();
    net.add_link(v[0], v[1], false).unwrap();
    net.add_link(v[1], v[2], false).unwrap();
    net.add_link(v[2], v[0], false).unwrap();
    let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
    for variable in v.iter() {
        assert_float_relative_eq!(1.0, heuristic.h6(NodeIndex(variable.0)), 0.000001);
    }
    assert!(heuristic.variable_to_delete(&net).is_some());
}

#[test]
fn cano_moral_ratio_is_well_formed() {
    for seed in 0..10 {
        let (net, v) = random_network(seed, 12, 0.3);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        let moral = heuristic.markov_net().graph();
        for node in moral.nodes_iter() {
            assert!(heuristic.created_clique_size(node) >= 1.0);
            assert!(heuristic.sum_cliques_sizes(node) >= 1.0);
            let neighbors = moral.neighbors(node);
            let cliques = maximal_cliques(moral, node);
            for clique in cliques.iter() {
                assert!(clique.contains(&node));
                assert!(moral.is_clique(clique));
                assert!(neighbors.iter().all(|n| clique.contains(n) || !clique.iter().all(|m| moral.are_adjacent(*m, *n))));
            }
            // Every edge around the node lies in some maximal clique
            for n in neighbors.iter() {
                assert!(cliques.iter().any(|c| c.contains(n)));
            }
            if moral.is_clique(&neighbors) {
                assert_float_relative_eq!(1.0, heuristic.h6(node), 0.000001);
            }
        }
    }
}

#[test]
fn cano_moral_counts_every_maximal_clique() {
    let mut net = ProbNet::new();
    let v = (0..5).map(|i| net.add_variable(Variable::chance(&format!("V{}", i), 2))).collect::<Vec<VariableIndex>>();
    for (a, b) in [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 4), (2, 3)] {
        net.add_link(v[a], v[b], false).unwrap();
    }
    let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
    assert_eq!(3, maximal_cliques(heuristic.markov_net().graph(), NodeIndex(0)).len());
    assert_float_relative_eq!(24.0, heuristic.sum_cliques_sizes(NodeIndex(0)), 0.000001);
    assert_float_relative_eq!(4.0 / 3.0, heuristic.h6(NodeIndex(0)), 0.000001);
}

#[test]
fn cano_moral_deletion_sequence_replays_the_elimination() {
    for seed in 0..10 {
        let (net, v) = random_network(seed, 12, 0.3);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        let sequence = heuristic.deletion_sequence();
        let mut args = args::Args::default();
        args.set_heuristic(Heuristic::CanoMoral);
        assert_eq!(sequence, elimination_order(&args, &net).unwrap());

        let nodes = sequence.iter().map(|v| NodeIndex(v.0)).collect::<Vec<NodeIndex>>();
        let replay = triangulate(heuristic.markov_net().graph(), &nodes).unwrap();
        assert_eq!(replay, heuristic.triangulated_graph().unwrap());
        assert_eq!(replay, triangulated_graph(&args, &net).unwrap());
    }
}

#[test]
fn unresolved_phase_variable_aborts_every_heuristic() {
    let (mut net, v) = random_network(3, 5, 0.5);
    net.remove_node(v[4]).unwrap();
    let registry = HeuristicRegistry::default();
    for name in registry.names() {
        let res = registry.create(name, &net, vec![v.clone()]);
        assert_eq!(Some(Error::NodeNotFound("V4".to_string())), res.err());
    }
}
