use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    UnknownSymbol(String),
    TruncatedStream,
    MalformedBitString(char),
    MalformedFrequencyPair(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(reason) => {
                write!(f, "Invalid frequency table: {}", reason)
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} is not present in the code table", symbol)
            }
            Self::TruncatedStream => {
                write!(f, "Bit stream ended in the middle of a code word")
            }
            Self::MalformedBitString(character) => {
                write!(
                    f,
                    "Bit string may only contain '0' and '1', found '{}'",
                    character
                )
            }
            Self::MalformedFrequencyPair(token) => {
                write!(
                    f,
                    "Frequency pair '{}' does not match the form symbol:count",
                    token
                )
            }
        }
    }
}

impl std::error::Error for Error {}
