// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Every argument is optional: launched bare, the program opens the menu
/// on `estoque.txt` in the working directory. If parsing fails (unknown
/// flag, missing value, or --help), clap prints the error or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
