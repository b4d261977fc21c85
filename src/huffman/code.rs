use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::tree::{CodeTree, NodeKind};
use crate::binary_stream::BitSequence;

struct TableEntry<S> {
    symbol: S,
    code: BitSequence,
}

/// Mapping from symbol to its prefix-free code
///
/// Entries are stored in leaf order of a left-first depth-first walk,
/// with a hash index for lookup. Codes are prefix-free by construction
/// since every code is the path to a distinct leaf.
pub struct CodeTable<S> {
    entries: Vec<TableEntry<S>>,
    index_by_symbol: HashMap<S, usize>,
}

impl<S> CodeTable<S>
where
    S: Clone + Eq + Hash + Debug,
{
    /// Walks the tree and records the root-to-leaf path of every symbol.
    ///
    /// Left extends the path with 0, right with 1. A lone leaf at the
    /// root gets the one-bit code "0", as if it hung off the left side
    /// of a synthesized parent; an empty code could never be found in a
    /// decode stream.
    pub fn derive(tree: &CodeTree<S>) -> CodeTable<S> {
        let mut entries = Vec::with_capacity(tree.leaf_count());
        // explicit stack so skewed alphabets cannot exhaust the call stack
        let mut walk_stack = vec![(tree.root_index, BitSequence::new())];
        while let Some((node_index, path)) = walk_stack.pop() {
            match &tree.nodes[node_index].kind {
                NodeKind::Leaf { symbol } => {
                    let mut code = path;
                    if code.is_empty() {
                        code.push(false);
                    }
                    entries.push(TableEntry {
                        symbol: symbol.clone(),
                        code,
                    });
                }
                NodeKind::Inner { left, right } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);
                    // right first, so the left child is processed first
                    walk_stack.push((*right, right_path));
                    walk_stack.push((*left, left_path));
                }
            }
        }
        let index_by_symbol = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.symbol.clone(), index))
            .collect();
        CodeTable {
            entries,
            index_by_symbol,
        }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSequence> {
        let index = self.index_by_symbol.get(symbol)?;
        Some(&self.entries[*index].code)
    }

    /// Entries in depth-first leaf order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSequence)> {
        self.entries.iter().map(|entry| (&entry.symbol, &entry.code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
