mod cli;
mod convert_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    shared::init_logging();

    let result = convert_cmd::run(&cli.input_path(), &cli.output_path());

    if let Err(code) = result {
        std::process::exit(code);
    }
}
