//! # Suffix Tree - Online Substring Indexing
//!
//! A Rust implementation of Ukkonen's algorithm for building a suffix tree
//! online, one symbol at a time.
//!
//! The tree indexes every suffix of a growing text while holding O(n)
//! nodes: non-branching runs are collapsed into single edges that store
//! index ranges into the text instead of copied symbols, and leaf edges
//! stay open-ended so each appended symbol lengthens all of them at once.
//!
//! ## Example
//!
//! ```
//! use suffix_tree_rs::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.extend("abcabxabcd".chars());
//!
//! assert!(tree.contains(&['a', 'b', 'c']));
//! assert!(tree.contains(&['b', 'x', 'a', 'b']));
//! assert!(!tree.contains(&['a', 'b', 'c', 'z']));
//!
//! println!("{} nodes", tree.stats().node_count);
//! ```
//!
//! ## Performance
//!
//! - O(1) amortized time per appended symbol
//! - Membership queries in time proportional to the pattern length,
//!   independent of the text length
//! - At most 2n nodes for a text of n symbols
//! - Memory-efficient using generational indices (SlotMap)

mod builder;
mod display;
mod node;
mod tree;
mod walk;

#[cfg(test)]
mod tests;

pub use tree::{SuffixTree, TreeStats};
pub use walk::Walk;
