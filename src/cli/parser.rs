//! CLI argument parsing with clap
//!
//! Commands, arguments and their help text.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// HTTP service that renders text as QR code images
#[derive(Parser, Debug)]
#[command(name = "qrcode-api")]
#[command(about = "HTTP service that renders text as QR code images")]
#[command(long_about = "
qrcode-api serves PNG, JPEG and GIF QR codes over HTTP.

EXAMPLES:
    # Start the server with default configuration
    qrcode-api serve

    # Start server on custom host and port
    qrcode-api serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    qrcode-api --config /path/to/config.toml serve

    # Run with production settings and verbose logging
    qrcode-api --env production --verbose serve

    # Check configuration without starting server
    qrcode-api serve --dry-run
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered files in the
    /// configuration directory. The file must exist and be readable.
    ///
    /// Example: --config /etc/qrcode-api/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` overlay is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   qrcode-api serve                           # Start with defaults
    ///   qrcode-api serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   qrcode-api serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on (1-65535)
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Overrides both the configuration file and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration, print a summary and exit
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The command to run; `serve` with defaults when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
            log_level: None,
            dry_run: false,
        })
    }

    /// The environment in effect: `--env` when given, else `QRCODE_APP_ENV`.
    pub fn environment(&self) -> crate::config::Environment {
        self.env
            .map(Into::into)
            .unwrap_or_else(crate::config::Environment::from_env)
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["qrcode-api", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["qrcode-api", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["qrcode-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
        assert_eq!(
            cli.command_or_default(),
            Commands::Serve {
                host: None,
                port: None,
                log_level: None,
                dry_run: false,
            }
        );
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::try_parse_from([
            "qrcode-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--log-level",
            "trace",
            "--dry-run",
        ])
        .unwrap();

        let Some(Commands::Serve {
            host,
            port,
            log_level,
            dry_run,
        }) = cli.command
        else {
            panic!("Expected Serve command");
        };
        assert_eq!(host.as_deref(), Some("0.0.0.0"));
        assert_eq!(port, Some(9090));
        assert_eq!(log_level, Some(LogLevel::Trace));
        assert!(dry_run);
    }

    #[test]
    fn test_env_aliases() {
        let cli = Cli::try_parse_from(["qrcode-api", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));

        let cli = Cli::try_parse_from(["qrcode-api", "-e", "stage"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Staging));
    }

    #[test]
    fn test_env_flag_sets_environment() {
        let cli = Cli::try_parse_from(["qrcode-api", "-e", "prod"]).unwrap();
        assert_eq!(cli.environment(), crate::config::Environment::Production);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Cli::try_parse_from(["qrcode-api", "serve", "--port", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["qrcode-api", "--verbose", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let err = Cli::try_parse_from(["qrcode-api", "--config", "/no/such/qrcode.toml"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
