use std::env;
use std::fs;

use suffix_tree_rs::SuffixTree;

/// Demo: index a file (or a built-in sample) and query it.
///
/// Usage: cargo run --example search [filename]
fn main() {
    let args: Vec<String> = env::args().collect();

    let text: Vec<u8> = if args.len() == 2 {
        fs::read(&args[1]).unwrap_or_else(|_| {
            eprintln!("File \"{}\" not found.", args[1]);
            std::process::exit(1);
        })
    } else {
        b"abcabxabcd".to_vec()
    };

    // Index byte by byte, reporting progress on large inputs.
    let mut tree = SuffixTree::new();
    for (count, &byte) in text.iter().enumerate() {
        tree.push(byte);

        if (count + 1) % 100_000 == 0 {
            println!("{}", count + 1);
        }
    }

    if text.len() <= 64 {
        println!("{}", tree);
    }

    // Verify by looking up suffixes (all of them for small inputs, a
    // sample for large ones).
    let stride = (text.len() / 1_000).max(1);
    let mut checked = 0usize;
    let mut missing = 0usize;
    for k in (0..text.len()).step_by(stride) {
        checked += 1;
        if !tree.contains(&text[k..]) {
            eprintln!("suffix at offset {} not found", k);
            missing += 1;
        }
    }
    if missing == 0 {
        println!("{} suffixes checked, all found", checked);
    }

    let stats = tree.stats();

    println!("\n=== Statistics ===");
    println!("Symbols indexed: {}", stats.text_len);
    println!("Nodes: {}", stats.node_count);
    println!("Edges: {} ({} leaves)", stats.edge_count, stats.leaf_count);
    println!("Nodes per symbol: {:.2}", stats.nodes_per_symbol());
}
