//! Inventory Tracker CLI
//!
//! Interactive console menu for tracking stock items in a text file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --store /var/lib/loja/estoque.txt
//! RUST_LOG=debug cargo run -- --no-pause < script.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: Exit chosen from the menu, or input ended
//! - 1: The terminal could not be written to
//! - 2: Invalid command-line arguments

use env_logger::{Builder, Env};
use inventory_tracker::cli;
use inventory_tracker::shell::Shell;
use log::error;
use std::io;
use std::process;

fn init_logger() {
    // Logs go to stderr; RUST_LOG overrides the level.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let args = cli::parse_args();
    let config = args.to_shell_config();

    let stdin = io::stdin();
    let mut shell = Shell::from_config(&config, stdin.lock(), io::stdout());

    if let Err(e) = shell.run() {
        error!("terminal I/O failed: {}", e);
        process::exit(1);
    }
}
