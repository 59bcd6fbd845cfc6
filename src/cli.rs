use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skipquote", version, about = "Skip hire availability and quotes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the skips available at the configured location (default)
    List,

    /// Select a skip and print its quote summary
    Quote {
        /// Skip id to select
        #[arg(long, conflicts_with = "size")]
        id: Option<i64>,

        /// Skip size in cubic yards to select
        #[arg(long)]
        size: Option<u32>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to List if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}
