//! Builds a tree from random values, unbalances it with a run of large
//! values, then rebalances it, printing the tree and its traversals at each
//! step.
//!
//! Usage: `cargo run --example driver -- [count] [seed]`
//!
//! Set `RUST_LOG=debug` to see the library's build and rebalance events.

use balanced_bst::Tree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 15;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let count = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_COUNT);
    let mut rng = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Creating a binary search tree from random numbers...");
    let values: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=100)).collect();
    let mut tree = Tree::from_values(values);

    println!("\nInitial tree:");
    print!("{tree}");
    println!("\nIs the tree balanced? {}", tree.is_balanced());
    print_traversals(&tree);

    println!("\nAdding numbers > 100 to unbalance the tree...");
    tree.extend(101..=105);

    println!("\nUnbalanced tree:");
    print!("{tree}");
    println!("\nIs the tree balanced? {}", tree.is_balanced());

    println!("\nRebalancing tree...");
    tree.rebalance();

    println!("\nRebalanced tree:");
    print!("{tree}");
    println!("\nIs the tree balanced? {}", tree.is_balanced());
    print_traversals(&tree);
}

fn print_traversals(tree: &Tree<u32>) {
    println!();
    println!("Level order traversal: {:?}", tree.level_order().collect::<Vec<_>>());
    println!("Preorder traversal: {:?}", tree.preorder().collect::<Vec<_>>());
    println!("Postorder traversal: {:?}", tree.postorder().collect::<Vec<_>>());
    println!("Inorder traversal: {:?}", tree.inorder().collect::<Vec<_>>());
}
