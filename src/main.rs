mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use cursor_keepalive_core::config::AppConfig;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
        warn!(path = %cli.config, "config file not found, using defaults");
        include_str!("../config/default.toml").to_string()
    });
    let mut config: AppConfig = toml::from_str(&config_str)?;

    // Handy override for scripted runs against a different mail provider
    if let Ok(v) = std::env::var("EMAIL_DOMAIN") {
        if !v.is_empty() {
            config.account.email_domain = v;
        }
    }

    match cli.command {
        Commands::Reset => commands::reset::run(config),
        Commands::Account => commands::account::run(config),
        Commands::Auth {
            email,
            cookie,
            access_token,
            refresh_token,
            show,
        } => commands::auth::run(config, email, cookie, access_token, refresh_token, show),
        Commands::Code { file } => commands::code::run(file),
    }
}
