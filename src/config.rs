// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Run configuration
//!
//! All inputs are resolved exactly once at startup, into an immutable
//! [`Config`] that is passed into each stage. Stages never read the
//! environment themselves.
//!
//! The flag names double as GitHub Actions inputs: each flag binds to the
//! environment variable the Actions runner exports (`INPUT_FILE`,
//! `ECHIDNA_MANIFEST_URL`, ...), so the same binary works as a plain CLI
//! and as an action step.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Command-line / environment inputs shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Spec document to validate (required unless only publishing)
    #[clap(long, env = "INPUT_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Echidna manifest URL (the `url` publication parameter)
    #[clap(long, env = "ECHIDNA_MANIFEST_URL", default_value = "", hide_env_values = true)]
    pub manifest_url: String,

    /// Working-group decision URL (the `decision` publication parameter)
    #[clap(long, env = "WG_DECISION_URL", default_value = "", hide_env_values = true)]
    pub decision_url: String,

    /// Echidna API token
    #[clap(long, env = "ECHIDNA_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Comma-separated addresses to CC on publication
    #[clap(long, env = "CC", default_value = "")]
    pub cc: String,

    /// Name of the event that triggered this run
    #[clap(long, env = "GITHUB_EVENT_NAME", default_value = "push", value_name = "EVENT")]
    pub event: String,
}

/// Event that triggered the current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    PullRequest,
    Other(String),
}

impl TriggerEvent {
    pub fn parse(name: &str) -> Self {
        match name {
            "pull_request" => Self::PullRequest,
            other => Self::Other(other.to_string()),
        }
    }

    /// Publication must never happen for pull-request runs
    pub fn is_pull_request(&self) -> bool {
        matches!(self, Self::PullRequest)
    }
}

/// Immutable configuration for one pipeline run
#[derive(Clone)]
pub struct Config {
    /// Path to the spec document; only the Validate stage reads it
    pub file: Option<PathBuf>,
    /// Echidna manifest URL
    pub manifest_url: String,
    /// Working-group decision URL
    pub decision_url: String,
    /// Echidna API token
    pub token: String,
    /// CC addresses for publication notifications
    pub cc: String,
    /// Triggering event
    pub event: TriggerEvent,
}

impl Config {
    pub fn from_args(args: ConfigArgs) -> Self {
        Self {
            file: args.file,
            manifest_url: args.manifest_url,
            decision_url: args.decision_url,
            token: args.token,
            cc: args.cc,
            event: TriggerEvent::parse(&args.event),
        }
    }
}

// The token is a credential; keep it out of debug output and logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("file", &self.file)
            .field("manifest_url", &self.manifest_url)
            .field("decision_url", &self.decision_url)
            .field("token", &"<redacted>")
            .field("cc", &self.cc)
            .field("event", &self.event)
            .finish()
    }
}
