pub mod code;
pub mod codec;
pub mod tree;

pub use code::CodeTable;
pub use codec::Codec;
pub use tree::CodeTree;

/// Weight of a symbol at input time, strictly positive
pub type Frequency = u64;

/// A symbol together with its input frequency
pub type SymbolFrequency<S> = (S, Frequency);
