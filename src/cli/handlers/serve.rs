//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{Environment, Settings};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self {
            config,
            environment: Environment::from_env(),
        }
    }

    /// Environment the configuration was loaded for.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Run the server, or only validate and summarize when `dry_run` is set.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            for line in self.validate_only()? {
                println!("{}", line);
            }
            return Ok(());
        }

        Server::new(self.config)
            .with_environment(self.environment)
            .run()
            .await
    }

    /// Validate configuration without starting the server and return a summary.
    pub fn validate_only(&self) -> anyhow::Result<Vec<String>> {
        self.config.validate()?;
        let logger = self.config.logger.clone().into_logger_config()?;

        let mut summary = vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Environment: {}", self.environment),
            format!("✓ Server would bind to: {}", self.config.server.address()),
            format!(
                "✓ Request timeout: {}s",
                self.config.server.request_timeout
            ),
            format!("✓ Log level: {}", logger.level),
        ];
        if logger.file.enabled {
            summary.push(format!(
                "✓ File logging to: {}",
                logger.file.directory.join(&logger.file.prefix).display()
            ));
        }
        summary.push(
            "Dry run completed successfully - configuration is ready for deployment".to_string(),
        );

        Ok(summary)
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
