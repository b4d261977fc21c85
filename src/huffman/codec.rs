use std::fmt::Debug;
use std::hash::Hash;

use super::code::CodeTable;
use super::tree::{CodeTree, NodeKind};
use crate::binary_stream::BitSequence;
use crate::error::Error;

/// Encodes and decodes symbol sequences against one fixed code tree
///
/// Encoding goes through the derived table, decoding walks the
/// borrowed tree bit by bit. Decoding is only defined relative to the
/// exact tree that produced the encoding; persistence of the tree is a
/// collaborator's concern.
pub struct Codec<'a, S> {
    table: CodeTable<S>,
    tree: &'a CodeTree<S>,
}

impl<'a, S> Codec<'a, S>
where
    S: Clone + Eq + Hash + Debug,
{
    pub fn new(tree: &'a CodeTree<S>) -> Codec<'a, S> {
        Codec {
            table: CodeTable::derive(tree),
            tree,
        }
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    /// Concatenates the code of every symbol in order, without padding.
    pub fn encode_sequence(&self, sequence: &[S]) -> Result<BitSequence, Error> {
        let mut output = BitSequence::new();
        for symbol in sequence.iter() {
            let code = self
                .table
                .get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
            output.extend_from(code);
        }
        log::debug!(
            "encoded {} symbols into {} bits",
            sequence.len(),
            output.len()
        );
        Ok(output)
    }

    /// Walks the tree from the root, 0 left and 1 right, restarting at
    /// every leaf. Input that ends mid-walk fails with
    /// `TruncatedStream` and emits nothing for the incomplete tail.
    pub fn decode_sequence(&self, bits: &BitSequence) -> Result<Vec<S>, Error> {
        let mut output = Vec::new();
        // a single-symbol tree has its lone leaf at the root; only the
        // implicit 0 edge of the synthesized parent exists, a 1 bit
        // starts a walk that can never reach a leaf
        if let NodeKind::Leaf { symbol } = &self.tree.nodes[self.tree.root_index].kind {
            for bit in bits.iter() {
                if bit {
                    return Err(Error::TruncatedStream);
                }
                output.push(symbol.clone());
            }
            return Ok(output);
        }
        let mut current_index = self.tree.root_index;
        for bit in bits.iter() {
            current_index = match self.tree.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                NodeKind::Leaf { .. } => {
                    unreachable!("walk restarts at the root after every emitted symbol")
                }
            };
            if let NodeKind::Leaf { symbol } = &self.tree.nodes[current_index].kind {
                output.push(symbol.clone());
                current_index = self.tree.root_index;
            }
        }
        if current_index != self.tree.root_index {
            return Err(Error::TruncatedStream);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::Codec;
    use crate::binary_stream::BitSequence;
    use crate::error::Error;
    use crate::huffman::tree::CodeTree;

    const SYMBOLS_AND_FREQUENCIES: &[(char, u64); 4] =
        &[('A', 5), ('B', 1), ('C', 6), ('D', 3)];

    #[test]
    fn test_round_trip() {
        let tree = CodeTree::build(SYMBOLS_AND_FREQUENCIES).unwrap();
        let codec = Codec::new(&tree);
        let sequence: Vec<char> = "ABBADACABADACAD".chars().collect();
        let encoded = codec.encode_sequence(&sequence).unwrap();
        let decoded = codec.decode_sequence(&encoded).unwrap();
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_encoded_length_is_sum_of_code_lengths() {
        let tree = CodeTree::build(SYMBOLS_AND_FREQUENCIES).unwrap();
        let codec = Codec::new(&tree);
        // one occurrence of each symbol per input frequency
        let sequence: Vec<char> = SYMBOLS_AND_FREQUENCIES
            .iter()
            .flat_map(|(symbol, frequency)| {
                std::iter::repeat(*symbol).take(*frequency as usize)
            })
            .collect();
        let encoded = codec.encode_sequence(&sequence).unwrap();
        assert_eq!(encoded.len(), 28, "the worked example totals 28 bits");
    }

    #[test]
    fn test_empty_sequence_encodes_to_no_bits() {
        let tree = CodeTree::build(SYMBOLS_AND_FREQUENCIES).unwrap();
        let codec = Codec::new(&tree);
        let encoded = codec.encode_sequence(&[]).unwrap();
        assert!(encoded.is_empty());
        let decoded = codec.decode_sequence(&encoded).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let tree = CodeTree::build(SYMBOLS_AND_FREQUENCIES).unwrap();
        let codec = Codec::new(&tree);
        let result = codec.encode_sequence(&['A', 'Z']);
        match result {
            Err(Error::UnknownSymbol(symbol)) => assert_eq!(symbol, "'Z'"),
            other => panic!("Expected UnknownSymbol error, got {:?}", other.map(|b| b.to_string())),
        }
    }

    #[test]
    fn test_truncated_stream_is_rejected() {
        // codes here are C:0, B:100, D:101, A:11; "11010" decodes A
        // and C and then ends inside the walk for the third symbol
        let tree = CodeTree::build(SYMBOLS_AND_FREQUENCIES).unwrap();
        let codec = Codec::new(&tree);
        let bits = BitSequence::from_bit_str("11010").unwrap();
        match codec.decode_sequence(&bits) {
            Err(Error::TruncatedStream) => {}
            other => panic!("Expected TruncatedStream error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let tree = CodeTree::build(&[('X', 7)]).unwrap();
        let codec = Codec::new(&tree);
        let sequence = vec!['X', 'X', 'X'];
        let encoded = codec.encode_sequence(&sequence).unwrap();
        assert_eq!(encoded.to_string(), "000");
        let decoded = codec.decode_sequence(&encoded).unwrap();
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_single_symbol_rejects_absent_branch() {
        let tree = CodeTree::build(&[('X', 7)]).unwrap();
        let codec = Codec::new(&tree);
        let bits = BitSequence::from_bit_str("001").unwrap();
        match codec.decode_sequence(&bits) {
            Err(Error::TruncatedStream) => {}
            other => panic!("Expected TruncatedStream error, got {:?}", other),
        }
    }
}
