use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Checks the ordering invariant at every node and that `len` matches the
/// number of reachable nodes.
fn validate_tree<T: Ord + Debug>(t: &Tree<T>) {
    fn walk<'a, T: Ord + Debug>(
        node: Option<&'a Node<T>>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    ) -> usize {
        let Some(node) = node else {
            return 0;
        };
        let v = node.value();
        if let Some(lower) = lower {
            assert!(v > lower, "{v:?} must be greater than ancestor {lower:?}");
        }
        if let Some(upper) = upper {
            assert!(v < upper, "{v:?} must be less than ancestor {upper:?}");
        }
        1 + walk(node.left(), lower, Some(v)) + walk(node.right(), Some(v), upper)
    }

    let reachable = walk(t.root(), None, None);
    assert_eq!(reachable, t.len(), "reachable node count must match Tree::len");
    assert_eq!(t.is_empty(), t.len() == 0);
}

/// Smallest achievable height for `n` nodes: `ceil(log2(n + 1)) - 1`.
fn min_height(n: usize) -> isize {
    (usize::BITS - n.leading_zeros()) as isize - 1
}

fn sorted_unique(values: &[i32]) -> Vec<i32> {
    values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Delete(i32),
    Find(i32),
    Rebalance,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A narrow value range keeps hits on existing values frequent.
    let value = -64i32..64;
    let op = prop_oneof![
        45 => value.clone().prop_map(Op::Insert),
        35 => value.clone().prop_map(Op::Delete),
        18 => value.prop_map(Op::Find),
        2 => Just(Op::Rebalance),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_build_is_sorted_and_minimal(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let t = Tree::from_values(values.clone());
        validate_tree(&t);

        let expected = sorted_unique(&values);
        prop_assert_eq!(t.inorder().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(t.height(), min_height(expected.len()));
        prop_assert!(t.is_balanced());
    }

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: Tree<i32> = Tree::new();
        let mut m: BTreeSet<i32> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    prop_assert_eq!(t.insert(v), m.insert(v));
                    prop_assert!(t.contains(&v));
                }
                Op::Delete(v) => {
                    prop_assert_eq!(t.delete(&v), m.remove(&v));
                    prop_assert!(t.find(&v).is_none());
                }
                Op::Find(v) => {
                    prop_assert_eq!(t.find(&v).map(|n| *n.value()), m.get(&v).copied());
                }
                Op::Rebalance => {
                    t.rebalance();
                    prop_assert!(t.is_balanced());
                    prop_assert_eq!(t.height(), min_height(m.len()));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let got: Vec<i32> = t.inorder().copied().collect();
        let expected: Vec<i32> = m.iter().copied().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_traversals_visit_each_value_once(
        initial in prop::collection::vec(-200i32..200, 0..100),
        extra in prop::collection::vec(-200i32..200, 0..50),
        removed in prop::collection::vec(-200i32..200, 0..50),
    ) {
        let mut t = Tree::from_values(initial);
        t.extend(extra);
        for v in &removed {
            t.delete(v);
        }
        validate_tree(&t);

        let expected: Vec<i32> = t.inorder().copied().collect();
        for order in [
            t.level_order().copied().collect::<Vec<_>>(),
            t.preorder().copied().collect::<Vec<_>>(),
            t.postorder().copied().collect::<Vec<_>>(),
        ] {
            prop_assert_eq!(order.len(), t.len());
            let mut sorted = order;
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &expected);
        }

        if let Some(root) = t.root() {
            prop_assert_eq!(t.preorder().next(), Some(root.value()));
            prop_assert_eq!(t.level_order().next(), Some(root.value()));
            prop_assert_eq!(t.postorder().last(), Some(root.value()));
        }
    }

    #[test]
    fn prop_rebalance_preserves_values(
        values in prop::collection::vec(any::<i16>(), 0..200),
    ) {
        let mut t: Tree<i16> = Tree::new();
        t.extend(values);
        let before: Vec<i16> = t.inorder().copied().collect();

        t.rebalance();
        validate_tree(&t);
        prop_assert!(t.is_balanced());
        prop_assert_eq!(t.inorder().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn prop_depth_counts_ancestors(values in prop::collection::vec(-100i32..100, 1..80)) {
        let mut t = Tree::new();
        t.extend(values);

        let mut expected = Vec::new();
        fn record(node: Option<&Node<i32>>, depth: usize, out: &mut Vec<(i32, usize)>) {
            if let Some(node) = node {
                out.push((*node.value(), depth));
                record(node.left(), depth + 1, out);
                record(node.right(), depth + 1, out);
            }
        }
        record(t.root(), 0, &mut expected);

        for (v, depth) in expected {
            prop_assert_eq!(t.depth(&v), Ok(depth));
        }
        prop_assert_eq!(t.depth(&100), Err(TreeError::NotFound));
    }
}

#[test]
fn delete_every_value_in_every_order() {
    fn for_each_permutation(items: &[i32], f: &mut impl FnMut(&[i32])) {
        fn rec(items: &[i32], used: &mut [bool], out: &mut Vec<i32>, f: &mut impl FnMut(&[i32])) {
            if out.len() == items.len() {
                f(out);
                return;
            }
            for i in 0..items.len() {
                if used[i] {
                    continue;
                }
                used[i] = true;
                out.push(items[i]);
                rec(items, used, out, f);
                out.pop();
                used[i] = false;
            }
        }

        let mut used = vec![false; items.len()];
        let mut out = Vec::with_capacity(items.len());
        rec(items, &mut used, &mut out, f);
    }

    let values = [1, 2, 3, 4, 5, 6];
    let base = Tree::from_values(values);

    for_each_permutation(&values, &mut |perm| {
        let mut t = base.clone();
        let mut m: BTreeSet<i32> = values.iter().copied().collect();
        for v in perm {
            assert!(t.delete(v));
            m.remove(v);
            validate_tree(&t);
            assert_eq!(t.inorder().copied().collect::<Vec<_>>(), m.iter().copied().collect::<Vec<_>>());
        }
        assert!(t.is_empty());
        assert!(t.root().is_none());
    });
}
