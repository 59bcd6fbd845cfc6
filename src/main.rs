use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use skipquote::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::List => {
            commands::list::execute().await?;
        }
        cli::Commands::Quote { id, size } => {
            commands::quote::execute(id, size).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show()?,
            cli::ConfigCommands::Validate => commands::config::validate()?,
        },
        cli::Commands::Version => {
            println!("skipquote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
