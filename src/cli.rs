use crate::error::Error;
use crate::huffman::SymbolFrequency;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command,
};
use std::ffi::OsString;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_frequencies_argument(command);
        let command = Self::register_message_argument(command);
        Self::register_decode_argument(command)
    }

    fn register_frequencies_argument(command: Command) -> Command {
        command.arg(Self::create_frequencies_argument())
    }

    fn register_message_argument(command: Command) -> Command {
        command.arg(Self::create_message_argument())
    }

    fn register_decode_argument(command: Command) -> Command {
        command.arg(Self::create_decode_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_frequencies_argument() -> Arg {
        Arg::new("frequencies")
            .help("Comma separated symbol:count pairs, e.g. A:5,B:1,C:6,D:3")
            .required(true)
    }

    fn create_message_argument() -> Arg {
        arg!(-m --message <TEXT> "Message to encode with the derived code").required(false)
    }

    fn create_decode_argument() -> Arg {
        arg!(-d --decode <BITS> "Bit string to decode against the derived code").required(false)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            frequencies: Self::extract_frequencies_argument(matches),
            message: Self::extract_message_argument(matches),
            decode: Self::extract_decode_argument(matches),
        }
    }

    fn extract_frequencies_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("frequencies")
            .expect("Required argument frequencies not provided")
            .clone()
    }

    fn extract_message_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("message").cloned()
    }

    fn extract_decode_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("decode").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a frequency table literal like "A:5,B:1,C:6,D:3"
pub fn parse_frequency_list(list: &str) -> Result<Vec<SymbolFrequency<char>>, Error> {
    let mut pairs = Vec::new();
    for token in list.split(',') {
        let token = token.trim();
        let (symbol_part, count_part) = token
            .split_once(':')
            .ok_or_else(|| Error::MalformedFrequencyPair(token.to_owned()))?;
        let mut symbol_characters = symbol_part.chars();
        let symbol = symbol_characters
            .next()
            .ok_or_else(|| Error::MalformedFrequencyPair(token.to_owned()))?;
        if symbol_characters.next().is_some() {
            return Err(Error::MalformedFrequencyPair(token.to_owned()));
        }
        let frequency = count_part
            .parse::<u64>()
            .map_err(|_| Error::MalformedFrequencyPair(token.to_owned()))?;
        pairs.push((symbol, frequency));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use clap::Command;

    use super::{parse_frequency_list, CLIParser};
    use crate::error::Error;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_frequencies_argument() {
        let frequency_list = "A:5,B:1,C:6,D:3";
        let command = Command::new("test");
        let command = CLIParser::register_frequencies_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, frequency_list]);
        let frequencies = CLIParser::extract_frequencies_argument(&matches);
        assert_eq!(frequencies, frequency_list);
    }

    #[test]
    fn parse_message_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_message_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--message", "ABRACADABRA"]);
        let message = CLIParser::extract_message_argument(&matches);
        assert_eq!(message.as_deref(), Some("ABRACADABRA"));
    }

    #[test]
    fn parse_missing_message_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_message_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let message = CLIParser::extract_message_argument(&matches);
        assert_eq!(message, None);
    }

    #[test]
    fn parse_decode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_decode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--decode", "0101"]);
        let decode = CLIParser::extract_decode_argument(&matches);
        assert_eq!(decode.as_deref(), Some("0101"));
    }

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "A:5,B:1"]);
        assert_eq!(
            arguments.frequencies, "A:5,B:1",
            "frequencies does not match"
        );
        assert_eq!(arguments.message, None, "message does not match");
        assert_eq!(arguments.decode, None, "decode does not match");
    }

    #[test]
    fn parse_well_formed_frequency_list() {
        let pairs = parse_frequency_list("A:5, B:1,C:6 ,D:3").expect("list should parse");
        assert_eq!(pairs, vec![('A', 5), ('B', 1), ('C', 6), ('D', 3)]);
    }

    #[test]
    fn parse_frequency_list_without_separator() {
        let result = parse_frequency_list("A5");
        match result {
            Err(Error::MalformedFrequencyPair(token)) => assert_eq!(token, "A5"),
            other => panic!("Malformed pair not detected: {:?}", other),
        }
    }

    #[test]
    fn parse_frequency_list_with_multi_character_symbol() {
        let result = parse_frequency_list("AB:5");
        match result {
            Err(Error::MalformedFrequencyPair(token)) => assert_eq!(token, "AB:5"),
            other => panic!("Malformed pair not detected: {:?}", other),
        }
    }

    #[test]
    fn parse_frequency_list_with_bad_count() {
        let result = parse_frequency_list("A:x");
        match result {
            Err(Error::MalformedFrequencyPair(token)) => assert_eq!(token, "A:x"),
            other => panic!("Malformed pair not detected: {:?}", other),
        }
    }
}
