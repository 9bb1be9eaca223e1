// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for specflow.

pub mod publish;
pub mod run;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::config::ConfigArgs;

/// Spec validation and publication pipeline
///
/// Validate a spec document with respec-validator and submit it to the
/// W3C Echidna publication service.
#[derive(Parser, Debug)]
#[clap(
    name = "specflow",
    version,
    about = "Validate a spec document and publish it to /TR/ via Echidna",
    long_about = None,
    after_help = "Examples:\n\
        specflow run --file index.html        Install, validate, publish\n\
        specflow validate --file index.html   Install and validate only\n\
        specflow publish                      Request publication only\n\n\
        Every flag can also be set through its environment variable\n\
        (INPUT_FILE, ECHIDNA_MANIFEST_URL, WG_DECISION_URL, ECHIDNA_TOKEN,\n\
        CC, GITHUB_EVENT_NAME), which is how GitHub Actions passes inputs."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: install, validate, publish
    Run {
        #[clap(flatten)]
        config: ConfigArgs,
    },

    /// Install the validator and validate the document, without publishing
    Validate {
        #[clap(flatten)]
        config: ConfigArgs,
    },

    /// Request publication of an already-validated document
    Publish {
        #[clap(flatten)]
        config: ConfigArgs,
    },
}
