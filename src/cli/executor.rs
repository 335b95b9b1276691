//! Command executor for dispatching CLI commands

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::Settings;

/// Execute the parsed command with merged settings.
///
/// With no subcommand the server starts with default serve options.
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match cli.command_or_default() {
        Commands::Serve { dry_run, .. } => {
            ServeCommandHandler::new(settings)
                .with_environment(cli.environment())
                .execute(dry_run)
                .await
        }
    }
}
