use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::{Frequency, SymbolFrequency};
use crate::error::Error;

#[derive(Clone)]
pub(crate) enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: usize, right: usize },
}

#[derive(Clone)]
pub(crate) struct Node<S> {
    pub(crate) frequency: Frequency,
    pub(crate) kind: NodeKind<S>,
}

/// An immutable code tree with minimal weighted path length
///
/// Nodes live in an arena indexed by creation order; children are
/// referenced by index and traversal is top-down only. A tree built
/// from a single distinct symbol consists of the lone leaf at the
/// root, which the derivation and codec layers treat as an internal
/// node with an absent right branch.
pub struct CodeTree<S> {
    pub(crate) nodes: Vec<Node<S>>,
    pub(crate) root_index: usize,
    leaf_count: usize,
}

/// Heap key for the merge loop
///
/// `index` is the arena index, which equals insertion order into the
/// heap, so equal frequencies resolve first-inserted-first and the
/// resulting codes are reproducible.
struct HeapEntry {
    frequency: Frequency,
    index: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.index == other.index
    }
}

impl Eq for HeapEntry {}

impl<S> CodeTree<S>
where
    S: Clone + Eq + Hash + Debug,
{
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Fails when the table is empty, contains a zero frequency or
    /// lists a symbol twice. Input order is the tie-break key, so two
    /// builds from the same slice yield identical trees.
    pub fn build(symbols_and_frequencies: &[SymbolFrequency<S>]) -> Result<CodeTree<S>, Error> {
        if symbols_and_frequencies.is_empty() {
            return Err(Error::InvalidInput("frequency table is empty".to_owned()));
        }

        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(symbols_and_frequencies.len() * 2 - 1);
        let mut seen_symbols = HashSet::new();

        // create the initial leaf set
        for (symbol, frequency) in symbols_and_frequencies.iter() {
            if *frequency == 0 {
                return Err(Error::InvalidInput(format!(
                    "symbol {:?} has frequency zero",
                    symbol
                )));
            }
            if !seen_symbols.insert(symbol.clone()) {
                return Err(Error::InvalidInput(format!(
                    "symbol {:?} appears more than once",
                    symbol
                )));
            }
            let index = nodes.len();
            nodes.push(Node {
                frequency: *frequency,
                kind: NodeKind::Leaf {
                    symbol: symbol.clone(),
                },
            });
            heap.push(Reverse(HeapEntry {
                frequency: *frequency,
                index,
            }));
        }
        let leaf_count = nodes.len();

        // merge nodes until one remains
        while heap.len() > 1 {
            let first = heap.pop().unwrap().0;
            let second = heap.pop().unwrap().0;
            let index = nodes.len();
            let frequency = first.frequency + second.frequency;
            nodes.push(Node {
                frequency,
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
            });
            heap.push(Reverse(HeapEntry { frequency, index }));
        }
        let root_index = heap.pop().unwrap().0.index;
        log::debug!(
            "built code tree with {} leaves and {} nodes",
            leaf_count,
            nodes.len()
        );

        Ok(CodeTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Sum over leaves of frequency times code length
    ///
    /// The lone leaf of a single-symbol tree sits at depth zero but
    /// still costs one bit per occurrence.
    pub fn weighted_path_length(&self) -> u64 {
        let mut total = 0;
        let mut node_index_stack = vec![(self.root_index, 0_u64)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { .. } => {
                    total += self.nodes[index].frequency * depth.max(1);
                }
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
            }
        }
        total
    }
}
