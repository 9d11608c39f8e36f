use crate::node::{Edge, EdgeEnd, NodeKey};
use crate::tree::SuffixTree;
use std::hash::Hash;

/// Read-only traversal cursor over a built tree.
///
/// The cursor sits either exactly on a node or partway along one of its
/// edges, and consumes one symbol per [`advance`](Walk::advance) call.
/// Crossing from an exhausted edge label into its child node happens
/// before the next symbol is consumed.
pub struct Walk<'a, T> {
    tree: &'a SuffixTree<T>,
    node: NodeKey,
    /// Selected edge plus the number of its label symbols consumed so far.
    edge: Option<(&'a Edge, usize)>,
    depth: usize,
}

impl<'a, T: Hash + Eq + Clone> Walk<'a, T> {
    pub(crate) fn new(tree: &'a SuffixTree<T>) -> Self {
        Self {
            tree,
            node: tree.root,
            edge: None,
            depth: 0,
        }
    }

    /// Number of symbols matched so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes one symbol. Returns false, leaving the cursor where it
    /// was, when the tree has no continuation for the symbol.
    #[inline]
    pub fn advance(&mut self, symbol: &T) -> bool {
        let tree = self.tree;
        loop {
            match self.edge {
                None => {
                    return match tree.nodes[self.node].edges.get(symbol) {
                        Some(edge) => {
                            self.edge = Some((edge, 1));
                            self.depth += 1;
                            true
                        }
                        None => false,
                    };
                }
                Some((edge, consumed)) => {
                    let last = edge.last(tree.text.len() - 1);
                    if edge.start + consumed <= last {
                        return if tree.text[edge.start + consumed] == *symbol {
                            self.edge = Some((edge, consumed + 1));
                            self.depth += 1;
                            true
                        } else {
                            false
                        };
                    }
                    // Label exhausted: hop into the child and retry. An
                    // open edge has nothing below the end of the text.
                    match edge.end {
                        EdgeEnd::Closed { child, .. } => {
                            self.node = child;
                            self.edge = None;
                        }
                        EdgeEnd::Open => return false,
                    }
                }
            }
        }
    }
}

impl<T: Hash + Eq + Clone> SuffixTree<T> {
    /// Starts a traversal at the root.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(self)
    }

    /// Whether `pattern` occurs as a contiguous substring of the indexed
    /// text. The empty pattern is always contained. Runs in time
    /// proportional to the pattern length, independent of the text length.
    pub fn contains(&self, pattern: &[T]) -> bool {
        let mut walk = self.walk();
        pattern.iter().all(|symbol| walk.advance(symbol))
    }

    /// The earliest longest window of `pattern` that occurs as a substring
    /// of the indexed text. Returns an empty slice when no symbol of
    /// `pattern` occurs at all.
    pub fn longest_match<'p>(&self, pattern: &'p [T]) -> &'p [T] {
        let mut best_start = 0;
        let mut best_len = 0;
        for start in 0..pattern.len() {
            if pattern.len() - start <= best_len {
                // No remaining window can beat the current best.
                break;
            }
            let mut walk = self.walk();
            let matched = pattern[start..]
                .iter()
                .take_while(|symbol| walk.advance(symbol))
                .count();
            if matched > best_len {
                best_start = start;
                best_len = matched;
            }
        }
        &pattern[best_start..best_start + best_len]
    }
}
