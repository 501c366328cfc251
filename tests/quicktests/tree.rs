use binary_search_tree::BinarySearchTree;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to an iteratively built tree, a recursively
/// built tree and a set. After every step both trees must answer lookups the
/// same way the set does.
fn do_ops<T>(ops: &[Op<T>]) -> (BinarySearchTree<T>, BinarySearchTree<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    let mut iterative = BinarySearchTree::new();
    let mut recursive = BinarySearchTree::new();
    let mut set = HashSet::new();

    for op in ops {
        match op {
            Op::Insert(x) => {
                iterative.insert(x.clone());
                recursive.insert_recursively(x.clone());
                set.insert(x.clone());
            }
            Op::Find(x) => {
                assert_eq!(iterative.find(x).is_some(), set.contains(x));
                assert_eq!(recursive.find_recursively(x).is_some(), set.contains(x));
            }
        }
    }

    (iterative, recursive)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let (iterative, recursive) = do_ops(&ops);

    iterative == recursive
        && iterative.dfs_pre_order() == recursive.dfs_pre_order()
        && iterative.dfs_in_order() == recursive.dfs_in_order()
        && iterative.dfs_post_order() == recursive.dfs_post_order()
        && iterative.bfs() == recursive.bfs()
}

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let values = tree.dfs_in_order();

    values.len() == xs.len() && values.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| {
        tree.find(x).map(|node| node.val()) == Some(x)
            && tree.find_recursively(x).map(|node| node.val()) == Some(x)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert_recursively(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
}

#[quickcheck]
fn every_traversal_visits_every_value(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();

    [
        tree.dfs_pre_order(),
        tree.dfs_in_order(),
        tree.dfs_post_order(),
        tree.bfs(),
    ]
    .iter()
    .all(|values| {
        let mut values: Vec<i8> = values.iter().map(|x| **x).collect();
        values.sort_unstable();
        values == expected
    })
}

/// Number of edges from the root to the node holding `val`, walking down the
/// same way a lookup does.
fn depth_of<T: Ord>(tree: &BinarySearchTree<T>, val: &T) -> Option<usize> {
    let mut depth = 0;
    let mut current = tree.root();
    while let Some(node) = current {
        match val.cmp(node.val()) {
            Ordering::Less => current = node.left(),
            Ordering::Greater => current = node.right(),
            Ordering::Equal => return Some(depth),
        }
        depth += 1;
    }

    None
}

#[quickcheck]
fn bfs_is_level_ordered(xs: Vec<u8>) -> bool {
    // Distinct values so every value has exactly one depth.
    let mut seen = HashSet::new();
    let distinct: Vec<u8> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    let tree: BinarySearchTree<_> = distinct.iter().copied().collect();
    let bfs = tree.bfs();

    if bfs.len() != distinct.len() || bfs.first().copied() != tree.root().map(|r| r.val()) {
        return false;
    }

    // Depth never decreases, and within a level values run left to right,
    // which in a search tree means ascending.
    let levels: Vec<(usize, u8)> = bfs
        .iter()
        .map(|x| (depth_of(&tree, *x).unwrap(), **x))
        .collect();
    levels.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn traversals_are_idempotent(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    tree.dfs_pre_order() == tree.dfs_pre_order()
        && tree.dfs_in_order() == tree.dfs_in_order()
        && tree.dfs_post_order() == tree.dfs_post_order()
        && tree.bfs() == tree.bfs()
}
