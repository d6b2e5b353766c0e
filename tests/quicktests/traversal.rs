use std::collections::VecDeque;

use linked_bst::{Subtree, Tree};

fn build(xs: &[(i8, u8)]) -> Tree<i8, u8> {
    let mut tree = Tree::new();
    for (k, v) in xs {
        tree.insert(*k, *v);
    }
    tree
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_stable(xs: Vec<(i8, u8)>, removes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        // Entries in insertion order. A removal takes the earliest entry still holding the key.
        let mut expected = xs;
        for r in &removes {
            let removed = tree.remove(r).ok();
            let position = expected.iter().position(|(k, _)| k == r);
            if removed != position.map(|i| expected.remove(i).1) {
                return false;
            }
        }
        expected.sort_by_key(|(k, _)| *k);

        let walked: Vec<_> = tree.in_order().map(|(k, v)| (*k, *v)).collect();
        walked == expected
    }
}

quickcheck::quickcheck! {
    fn in_order_matches_stable_sort(xs: Vec<(i8, u8)>) -> bool {
        let tree = build(&xs);
        let mut expected = xs;
        // `sort_by_key` is stable, and equal keys are walked in insertion order.
        expected.sort_by_key(|(k, _)| *k);

        let mut values: Vec<u8> = Vec::new();
        tree.dfs_in_order(&mut values);
        values == expected.iter().map(|(_, v)| *v).collect::<Vec<_>>()
    }
}

/// Reference breadth-first walk, one whole level at a time.
fn levels(root: Option<Subtree<'_, i8, u8>>) -> Vec<u8> {
    let mut out = Vec::new();
    let mut level: Vec<_> = root.into_iter().collect();
    while !level.is_empty() {
        out.extend(level.iter().map(|node| *node.value()));
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    out
}

quickcheck::quickcheck! {
    fn bfs_visits_level_by_level(xs: Vec<(i8, u8)>) -> bool {
        let tree = build(&xs);

        let mut values: Vec<u8> = Vec::new();
        tree.bfs(&mut values);
        values.len() == tree.len() && values == levels(tree.root())
    }
}

quickcheck::quickcheck! {
    fn bfs_with_any_queue_agrees(xs: Vec<(i8, u8)>) -> bool {
        let tree = build(&xs);

        let mut default: Vec<u8> = Vec::new();
        tree.bfs(&mut default);
        let mut custom: Vec<u8> = Vec::new();
        tree.bfs_with(VecDeque::with_capacity(1), &mut custom);
        default == custom
    }
}

quickcheck::quickcheck! {
    fn depth_first_orders_are_permutations(xs: Vec<(i8, u8)>) -> bool {
        let tree = build(&xs);

        let mut pre: Vec<u8> = Vec::new();
        tree.dfs_pre_order(&mut pre);
        let mut post: Vec<u8> = Vec::new();
        tree.dfs_post_order(&mut post);
        let mut sorted: Vec<u8> = Vec::new();
        tree.dfs_in_order(&mut sorted);

        pre.sort_unstable();
        post.sort_unstable();
        sorted.sort_unstable();
        pre == sorted && post == sorted
            && tree.pre_order().next().map(|(k, _)| k) == tree.root().map(|root| root.key())
            && tree.post_order().last().map(|(k, _)| k) == tree.root().map(|root| root.key())
    }
}
