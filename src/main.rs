// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! specflow - Spec validation and publication pipeline
//!
//! Validate a spec document and publish it to W3C /TR/ via Echidna.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use specflow::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "specflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run { config } => specflow::cli::run::run(config, cli.verbose).await,
        Commands::Validate { config } => specflow::cli::validate::run(config, cli.verbose).await,
        Commands::Publish { config } => specflow::cli::publish::run(config, cli.verbose).await,
    }
}
