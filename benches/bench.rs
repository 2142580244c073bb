use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trees::binary::BinaryTree;
use trees::handle::NodeRef;
use trees::search::BinarySearchTree;

/// Inserts `0..num_nodes` in an order that gives a perfectly balanced tree.
fn balanced_bst(num_levels: u32) -> BinarySearchTree<i32> {
    let num_nodes = 2i32.pow(num_levels) - 1;
    let mut tree = BinarySearchTree::new(num_nodes / 2);
    let mut ranges = vec![(0, num_nodes / 2), (num_nodes / 2 + 1, num_nodes)];
    while let Some((low, high)) = ranges.pop() {
        if low < high {
            let mid = low + (high - low) / 2;
            tree.insert(mid);
            ranges.push((low, mid));
            ranges.push((mid + 1, high));
        }
    }
    tree
}

/// A complete binary tree with `num_levels` levels. Also returns the root's right child, which
/// has two children whenever there are at least three levels.
fn complete_binary(num_levels: u32) -> (BinaryTree<u32>, NodeRef) {
    let mut tree = BinaryTree::new(0);
    let mut level = vec![tree.root()];
    for _ in 1..num_levels {
        let mut next = Vec::with_capacity(level.len() * 2);
        for parent in level {
            next.push(tree.add_child(parent, 0).unwrap());
            next.push(tree.add_child(parent, 0).unwrap());
        }
        level = next;
    }
    let child = tree.right(tree.root()).unwrap().unwrap();
    (tree, child)
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs it for various sizes of tree
/// before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut BinarySearchTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = 2i32.pow(num_levels) - 2;
        let tree = balanced_bst(num_levels);
        let id = BenchmarkId::new("bst", largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "insert-duplicate", |tree, i| {
        tree.insert(i);
    });
    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.inorder().count());
    });

    let mut group = c.benchmark_group("remove_and_replace");
    for num_levels in [3, 7, 11] {
        group.bench_function(BenchmarkId::new("binary", num_levels), |b| {
            b.iter_batched(
                || complete_binary(num_levels),
                |(mut tree, child)| {
                    let root = tree.root();
                    black_box(tree.remove_and_replace(root, child))
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
