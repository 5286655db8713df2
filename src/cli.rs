use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::comments::CommentsArgs;
use crate::commands::config::ConfigCommands;

#[derive(Parser)]
#[command(
    name = "gerrit-threads",
    bin_name = "gt",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print open review threads of the current change in quickfix format
    Comments(CommentsArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
