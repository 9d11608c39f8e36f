use crate::node::{EdgeEnd, NodeKey};
use crate::tree::SuffixTree;
use std::fmt;
use std::hash::Hash;

/// Diagnostic rendering: one line per edge, indented by depth, showing the
/// label's index range, the label symbols, and what hangs below. Sibling
/// order is unspecified. Read-only; holds no state outside the formatter.
impl<T: Hash + Eq + Clone + fmt::Debug> fmt::Display for SuffixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(root)")?;
        self.fmt_below(f, self.root, 1)
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug> SuffixTree<T> {
    fn fmt_below(&self, f: &mut fmt::Formatter<'_>, node: NodeKey, depth: usize) -> fmt::Result {
        for edge in self.nodes[node].edges.values() {
            let last = edge.last(self.text.len() - 1);
            write!(
                f,
                "{:indent$}[{}..={}] {:?}",
                "",
                edge.start,
                last,
                &self.text[edge.start..=last],
                indent = depth * 2
            )?;
            match edge.end {
                EdgeEnd::Open => writeln!(f, " (leaf)")?,
                EdgeEnd::Closed { child, .. } => {
                    match self.nodes[child].suffix_link {
                        Some(link) => writeln!(f, " (node {:?}, link {:?})", child, link)?,
                        None => writeln!(f, " (node {:?})", child)?,
                    }
                    self.fmt_below(f, child, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}
