mod cli;
mod commands;
mod infra;
mod shared;
#[cfg(test)]
mod testing;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { verbose, command } = Cli::parse();

    let config = shared::config::load_config()?;
    shared::logging::init_logging(verbose, config.log.format);

    match command {
        Commands::Comments(args) => commands::comments::run(&args, &config).await?,
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gt", &mut std::io::stdout());
        }
    }

    Ok(())
}
