mod common;

use pointpath_lib::{build_graph, build_union_graph, Connection, Error};

use common::{diagonal, network};

#[test]
fn union_graph_covers_every_point() {
    let network = network(&diagonal(&["A", "B", "C"]), &[("A", "B", 1.0)]);
    let graph = build_union_graph(network.points(), network.unions()).expect("graph builds");

    assert_eq!(graph.point_count(), 3);
    assert_eq!(graph.union_count(), 1);
    assert!(graph.contains("C"));
    assert_eq!(graph.neighbours("C").count(), 0);
}

#[test]
fn neighbours_list_both_directions() {
    let graph = build_graph(
        ["A", "B", "C"],
        vec![
            Connection::new("A", "B", 1.0),
            Connection::new("B", "C", 2.0),
        ],
    )
    .expect("graph builds");

    let mut around_b: Vec<(&str, f64)> = graph.neighbours("B").collect();
    around_b.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(around_b, vec![("A", 1.0), ("C", 2.0)]);
    assert_eq!(graph.neighbours("missing").count(), 0);
}

#[test]
fn duplicate_pairs_do_not_sum() {
    let graph = build_graph(
        ["A", "B"],
        vec![
            Connection::new("A", "B", 4.0),
            Connection::new("A", "B", 1.5),
        ],
    )
    .expect("graph builds");

    assert_eq!(graph.weight("A", "B"), Some(1.5));
    assert_eq!(graph.weight("B", "A"), Some(1.5));
}

#[test]
fn self_loop_is_rejected() {
    let err = build_graph(["A"], vec![Connection::new("A", "A", 1.0)]).expect_err("self loop");
    assert!(matches!(err, Error::InvalidUnion { .. }));
}

#[test]
fn network_graph_matches_union_graph() {
    let network = network(
        &diagonal(&["A", "B", "C"]),
        &[("A", "B", 1.0), ("B", "C", 2.0)],
    );
    let graph = network.graph().expect("graph builds");
    assert_eq!(graph.weight("C", "B"), Some(2.0));
    assert_eq!(graph.points().count(), 3);
}
