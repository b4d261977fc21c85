use std::collections::HashMap;

pub use cli::CLIParser;
pub use error::Error;
use huffman::{Codec, CodeTree};

pub mod binary_stream;
mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    frequencies: String,
    message: Option<String>,
    decode: Option<String>,
}

/// Builds the code for the given frequency table, prints it, and
/// encodes or decodes the optional message arguments against it.
pub fn run(arguments: &Arguments) -> Result<()> {
    let pairs = cli::parse_frequency_list(&arguments.frequencies)?;
    let tree = CodeTree::build(&pairs)?;
    let codec = Codec::new(&tree);
    log::info!(
        "derived {} codes, total weighted length {} bits",
        codec.table().len(),
        tree.weighted_path_length()
    );
    print_code_table(&pairs, &codec);
    println!("Total weighted length: {} bits", tree.weighted_path_length());
    if let Some(message) = &arguments.message {
        let sequence: Vec<char> = message.chars().collect();
        let encoded = codec.encode_sequence(&sequence)?;
        println!("Encoded message ({} bits): {}", encoded.len(), encoded);
    }
    if let Some(bit_text) = &arguments.decode {
        let bits = binary_stream::BitSequence::from_bit_str(bit_text)?;
        let decoded: String = codec.decode_sequence(&bits)?.into_iter().collect();
        println!("Decoded message: {}", decoded);
    }
    Ok(())
}

fn print_code_table(pairs: &[(char, u64)], codec: &Codec<'_, char>) {
    let frequencies: HashMap<char, u64> = pairs.iter().copied().collect();
    println!(" Symbol | Frequency | Code       | Weighted bits");
    println!("------------------------------------------------");
    for (symbol, code) in codec.table().iter() {
        println!(
            " {:>6} | {:>9} | {:<10} | {}",
            symbol,
            frequencies[symbol],
            code.to_string(),
            frequencies[symbol] * code.len() as u64
        );
    }
}
