//! Builds one of each tree and prints it. Set `RUST_LOG=debug` (or `trace`) to watch the
//! mutations as they happen.

use std::error::Error;

use log::info;
use trees::binary::BinaryTree;
use trees::general::GeneralTree;
use trees::handle::NodeRef;
use trees::render::Outline;
use trees::search::BinarySearchTree;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    general_demo()?;
    binary_demo()?;
    search_demo();

    Ok(())
}

fn general_demo() -> Result<(), Box<dyn Error>> {
    let mut tree = GeneralTree::new("Company");
    let root = tree.root();

    let departments = [
        ("IT", ["Aarav", "Diya"]),
        ("HR", ["Karan", "Meera"]),
        ("Finance", ["Rohan", "Sneha"]),
        ("Tech", ["Soumya", "Anaya"]),
        ("AI", ["Vivaan", "Isha"]),
        ("Research and Development", ["Arjun", "Priya"]),
    ];
    for (department, employees) in departments {
        let department = tree.add_child(root, department)?;
        for employee in employees {
            tree.add_child(department, employee)?;
        }
    }
    info!("built the company tree with {} nodes", tree.len());

    println!("Company:");
    print!("{}", Outline::new(tree.traverse()));
    println!();
    Ok(())
}

fn binary_demo() -> Result<(), Box<dyn Error>> {
    let mut tree = BinaryTree::new(10);
    let root = tree.root();

    let node_20 = tree.add_child(root, 20)?;
    let node_30 = tree.add_child(root, 30)?;

    let node_40 = tree.add_child(node_20, 40)?;
    let node_50 = tree.add_child(node_20, 50)?;
    let node_60 = tree.add_child(node_30, 60)?;
    let node_70 = tree.add_child(node_30, 70)?;

    for (parent, values) in [
        (node_60, [100, 110]),
        (node_70, [80, 90]),
        (node_40, [140, 150]),
        (node_50, [120, 130]),
    ] {
        for value in values {
            tree.add_child(parent, value)?;
        }
    }

    println!("Original Tree:");
    print!("{}", Outline::new(tree.traverse()).with_indent(3));
    println!();

    replace(&mut tree, node_30, node_70)?;
    println!("After Removing 70:");
    print!("{}", Outline::new(tree.traverse()).with_indent(3));
    println!();

    replace(&mut tree, root, node_30)?;
    println!("After Removing 30:");
    print!("{}", Outline::new(tree.traverse()).with_indent(3));
    println!();
    Ok(())
}

/// Removes `child` from `parent` and promotes its children. It is an error for `child` not to be
/// a child of `parent`, since printing the unchanged tree would be misleading.
fn replace(
    tree: &mut BinaryTree<u32>,
    parent: NodeRef,
    child: NodeRef,
) -> Result<(), Box<dyn Error>> {
    if tree.remove_and_replace(parent, child)? {
        Ok(())
    } else {
        Err(format!("{child} is not a child of {parent}").into())
    }
}

fn search_demo() {
    let elements = [60, 70, 20, 40, 50, 60, 90, 15, 35, 100];
    let mut tree = BinarySearchTree::new(elements[0]);
    tree.build(elements);

    print!("{}", Outline::new(tree.traverse()));

    let join = |values: Vec<String>| values.join(" ");
    println!(
        "Inorder Traversal:  {}",
        join(tree.inorder().map(ToString::to_string).collect())
    );
    println!(
        "Preorder Traversal:  {}",
        join(tree.preorder().map(ToString::to_string).collect())
    );
    println!(
        "Postorder Traversal:  {}",
        join(tree.postorder().map(ToString::to_string).collect())
    );
}
