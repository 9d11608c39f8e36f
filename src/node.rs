use ahash::AHashMap as HashMap;
use slotmap::new_key_type;

new_key_type! {
    /// Arena handle for a tree node.
    pub struct NodeKey;
}

/// Where an edge's label stops.
///
/// Open edges are exactly the leaf edges: their label always runs to the
/// most recently appended symbol, so appending one symbol lengthens every
/// leaf at once without revisiting any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeEnd {
    /// Label runs to the current end of the text; nothing hangs below.
    Open,
    /// Label stops at a fixed inclusive index, with a child node below it.
    Closed { last: usize, child: NodeKey },
}

/// A labeled transition between nodes: a run of non-branching symbols
/// collapsed into one hop. The label is `text[start..=last]`, where `last`
/// comes from the end descriptor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub start: usize,
    pub end: EdgeEnd,
}

impl Edge {
    /// A fresh leaf edge whose label begins at `start`.
    pub(crate) fn open(start: usize) -> Self {
        Edge {
            start,
            end: EdgeEnd::Open,
        }
    }

    /// Inclusive index of the last label symbol, given the index of the
    /// most recently appended text symbol.
    #[inline]
    pub(crate) fn last(&self, text_last: usize) -> usize {
        match self.end {
            EdgeEnd::Open => text_last,
            EdgeEnd::Closed { last, .. } => last,
        }
    }

    /// Number of symbols on the label.
    #[inline]
    pub(crate) fn label_len(&self, text_last: usize) -> usize {
        self.last(text_last) - self.start + 1
    }
}

/// A branching point in the tree (or the root).
///
/// `edges` maps the first symbol of each outgoing label to the edge
/// carrying it, so no two sibling edges can start with the same symbol.
/// `suffix_link` is the non-owning back reference to the node reached by
/// dropping the first symbol of the string that leads here; `None` until
/// resolved. The root's stays `None` and is never followed.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub edges: HashMap<T, Edge>,
    pub suffix_link: Option<NodeKey>,
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            edges: HashMap::new(),
            suffix_link: None,
        }
    }
}
