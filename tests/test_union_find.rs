/// Property-based tests for the union-find
///
/// Checks the structure against a naive component-labelling model and verifies
/// that `connected` behaves as an equivalence relation for any union sequence.
use percolation::{PercolationError, UnionFind};
use proptest::prelude::*;

/// Naive model: every element carries a label, union relabels a whole class
fn model_labels(n: usize, unions: &[(usize, usize)]) -> Vec<usize> {
    let mut labels: Vec<usize> = (0..n).collect();
    for &(a, b) in unions {
        let (from, to) = (labels[b], labels[a]);
        if from != to {
            for label in labels.iter_mut() {
                if *label == from {
                    *label = to;
                }
            }
        }
    }
    labels
}

fn unions_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..60),
        )
    })
}

#[test]
fn prop_connected_matches_model() {
    proptest!(|((n, unions) in unions_strategy())| {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &unions {
            uf.union(a, b).unwrap();
        }
        let labels = model_labels(n, &unions);

        for a in 0..n {
            for b in 0..n {
                prop_assert_eq!(
                    uf.connected(a, b).unwrap(),
                    labels[a] == labels[b],
                    "elements {} and {}", a, b
                );
            }
        }

        let mut classes = labels.clone();
        classes.sort_unstable();
        classes.dedup();
        prop_assert_eq!(uf.count(), classes.len());
    });
}

#[test]
fn prop_connected_is_equivalence() {
    proptest!(|((n, unions) in unions_strategy())| {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &unions {
            uf.union(a, b).unwrap();
        }

        for a in 0..n {
            prop_assert!(uf.connected(a, a).unwrap());
            for b in 0..n {
                let ab = uf.connected(a, b).unwrap();
                prop_assert_eq!(ab, uf.connected(b, a).unwrap());
                if !ab {
                    continue;
                }
                for c in 0..n {
                    if uf.connected(b, c).unwrap() {
                        prop_assert!(uf.connected(a, c).unwrap());
                    }
                }
            }
        }
    });
}

#[test]
fn prop_component_sizes_sum_to_len() {
    proptest!(|((n, unions) in unions_strategy())| {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &unions {
            uf.union(a, b).unwrap();
        }

        let mut total = 0;
        for x in 0..n {
            if uf.find(x).unwrap() == x {
                total += uf.size_of(x).unwrap();
            }
        }
        prop_assert_eq!(total, n);
    });
}

#[test]
fn prop_roots_are_stable_between_unions() {
    proptest!(|((n, unions) in unions_strategy(), probe in 0usize..40)| {
        let probe = probe % n;
        let mut uf = UnionFind::new(n);
        for &(a, b) in &unions {
            uf.union(a, b).unwrap();
        }

        let root = uf.find(probe).unwrap();
        // finds anywhere else only compress paths, never move roots
        for x in 0..n {
            uf.find(x).unwrap();
        }
        prop_assert_eq!(uf.find(probe).unwrap(), root);
        prop_assert_eq!(uf.find(root).unwrap(), root);
    });
}

#[test]
fn test_union_of_untouched_class_keeps_root() {
    let mut uf = UnionFind::new(6);
    uf.union(0, 1).unwrap();
    uf.union(2, 3).unwrap();
    let root = uf.find(1).unwrap();

    uf.union(4, 5).unwrap();
    assert_eq!(uf.find(1).unwrap(), root);
    assert_eq!(uf.count(), 3);
}

#[test]
fn test_out_of_range_ids() {
    let mut uf = UnionFind::new(4);
    for result in [
        uf.find(4).map(|_| ()),
        uf.union(4, 0),
        uf.connected(0, 10).map(|_| ()),
        uf.size_of(99).map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(PercolationError::IndexOutOfRange { len: 4, .. })
        ));
    }
    assert_eq!(uf.count(), 4);
}

#[test]
fn test_chain_of_unions_collapses_to_one_set() {
    let n = 1000;
    let mut uf = UnionFind::new(n);
    for i in 1..n {
        uf.union(i - 1, i).unwrap();
    }
    assert_eq!(uf.count(), 1);
    assert_eq!(uf.size_of(0).unwrap(), n);
    assert!(uf.connected(0, n - 1).unwrap());
}
