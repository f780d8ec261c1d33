use std::fmt::Display;

use anyhow::Context;
use clap::Parser;
use plain_bst::Tree;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_KEYS: [i32; 11] = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45];

#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(about = "Builds a binary search tree and prints what it looks like")]
struct Args {
    /// Keys to insert, in order. Duplicates are ignored. `--keys` with no value starts empty.
    #[arg(long, num_args = 0.., value_delimiter = ',', default_values_t = DEFAULT_KEYS)]
    keys: Vec<i32>,

    /// Keys to look up after inserting.
    #[arg(long, value_delimiter = ',', default_values_t = [40, 99])]
    search: Vec<i32>,

    /// Keys to delete, in order, after the lookups.
    #[arg(long, value_delimiter = ',', default_values_t = [30, 20, 10])]
    delete: Vec<i32>,

    /// Log filter used when `RUST_LOG` isn't set, e.g. `trace` to see every structural change.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Don't print the tree level by level.
    #[arg(long)]
    no_shape: bool,
}

fn configure_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level {log_level:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn join<T: Display>(keys: impl IntoIterator<Item = T>) -> String {
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The level order line, or a marker when there is nothing to walk.
fn level_order_line(tree: &Tree<i32>) -> String {
    if tree.is_empty() {
        "Tree is empty".to_string()
    } else {
        join(tree.level_order())
    }
}

fn print_shape(tree: &Tree<i32>) {
    for (depth, level) in tree.levels().iter().enumerate() {
        println!("  {:indent$}{}", "", join(level), indent = depth * 2);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    configure_tracing(&args.log_level)?;
    debug!(?args, "parsed arguments");

    println!("=== Binary Search Tree ===\n");
    println!("Inserting: {}", join(&args.keys));

    let mut tree = Tree::new();
    for key in &args.keys {
        if !tree.insert(*key) {
            info!(key, "duplicate key skipped");
        }
    }

    println!();
    println!("Inorder     (sorted):     {}", join(tree.inorder()));
    println!("Preorder    (root first): {}", join(tree.preorder()));
    println!("Postorder   (root last):  {}", join(tree.postorder()));
    println!("Level-order (BFS):        {}", level_order_line(&tree));

    if !args.no_shape && !tree.is_empty() {
        println!("\nShape:");
        print_shape(&tree);
    }

    println!("\nHeight:     {}", tree.height());
    println!("Node count: {}", tree.count_nodes());

    println!();
    for key in &args.search {
        println!("Search {key}: {}", tree.search(key));
    }

    for key in &args.delete {
        println!("\nDeleting {key}...");
        match tree.delete(key) {
            Some(_) => println!("Inorder: {}", join(tree.inorder())),
            None => println!("{key} not found, tree unchanged"),
        }
    }

    println!("\nFinal level-order: {}", level_order_line(&tree));
    println!("Final node count:  {}", tree.count_nodes());
    Ok(())
}
