use crate::core::DEFAULT_STORE_FILE;
use crate::shell::ShellConfig;
use clap::Parser;
use std::path::PathBuf;

/// Track stock items in a text file through an interactive menu
#[derive(Parser, Debug)]
#[command(name = "inventory-tracker")]
#[command(about = "Track stock items in a text file through an interactive menu", long_about = None)]
pub struct CliArgs {
    /// Store file holding one product per line
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = DEFAULT_STORE_FILE,
        help = "Path of the product store file"
    )]
    pub store: PathBuf,

    /// Skip the "press Enter" pause between actions
    #[arg(long = "no-pause", help = "Do not wait for Enter after each action")]
    pub no_pause: bool,
}

impl CliArgs {
    /// Create a ShellConfig from CLI arguments
    pub fn to_shell_config(&self) -> ShellConfig {
        ShellConfig {
            store_path: self.store.clone(),
            pause: !self.no_pause,
        }
    }
}
