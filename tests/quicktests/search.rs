use std::collections::HashSet;

use trees::render::Outline;
use trees::search::BinarySearchTree;

/// Builds a tree the same way the demo does: the first value is the root and `build` skips it.
fn tree_of(root: i8, xs: &[i8]) -> BinarySearchTree<i8> {
    let mut tree = BinarySearchTree::new(root);
    tree.build(std::iter::once(root).chain(xs.iter().copied()));
    tree
}

quickcheck::quickcheck! {
    fn contains(root: i8, xs: Vec<i8>) -> bool {
        let tree = tree_of(root, &xs);

        tree.contains(&root) && xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(root, &xs);
        let added: HashSet<_> = xs.into_iter().chain([root]).collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn duplicates_leave_tree_alone(root: i8, xs: Vec<i8>) -> bool {
        let mut tree = tree_of(root, &xs);
        let before = tree.clone();

        // Everything is already in there.
        let rejected = xs.iter().all(|x| !tree.insert(*x)) && !tree.insert(root);
        rejected && tree == before && tree.inorder().eq(before.inorder())
    }
}

quickcheck::quickcheck! {
    fn len_counts_distinct_values(root: i8, xs: Vec<i8>) -> bool {
        let tree = tree_of(root, &xs);
        let distinct: HashSet<_> = xs.iter().chain([&root]).collect();

        tree.len() == distinct.len()
            && tree.min() == *distinct.iter().min().unwrap()
            && tree.max() == *distinct.iter().max().unwrap()
    }
}

quickcheck::quickcheck! {
    fn outline_has_a_line_per_value(root: i8, xs: Vec<i8>) -> bool {
        let tree = tree_of(root, &xs);

        Outline::new(tree.traverse()).to_string().lines().count() == tree.len()
    }
}
