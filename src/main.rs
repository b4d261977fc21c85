use std::env::args_os;

use huffcode::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    if let Err(e) = run(&arguments) {
        eprintln!("huffcode failed because of: {}", e);
        std::process::exit(1);
    }
}
