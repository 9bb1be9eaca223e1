// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! External command execution
//!
//! Child processes inherit the parent's stdout/stderr so a human watching
//! the CI log sees installer and validator output live, not buffered after
//! the fact. The full command line is echoed before spawning.

use async_trait::async_trait;
use colored::Colorize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::errors::SpecflowError;

/// Execution options for a single command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Working directory (defaults to the current directory)
    pub current_dir: Option<PathBuf>,
    /// Additional environment variables
    pub env: HashMap<String, String>,
}

/// Trait for running external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion
    ///
    /// Resolves with `Ok(())` only when the child exits with status zero.
    async fn run(
        &self,
        command: &str,
        args: &[&str],
        options: &RunOptions,
    ) -> Result<(), SpecflowError>;

    /// Check that a tool is resolvable on the search path
    async fn check_available(&self, tool: &str) -> bool;
}

/// Runs commands as real child processes with inherited stdio
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        command: &str,
        args: &[&str],
        options: &RunOptions,
    ) -> Result<(), SpecflowError> {
        println!("{} {} {}", "$".dimmed(), command, args.join(" "));
        debug!(command, ?args, "spawning child process");

        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(ref dir) = options.current_dir {
            cmd.current_dir(dir);
        }
        cmd.envs(&options.env);

        let status = cmd.status().await.map_err(|e| SpecflowError::SpawnFailed {
            command: command.to_string(),
            source: e,
        })?;

        if status.success() {
            Ok(())
        } else {
            // A signal-terminated child has no exit code; report a sentinel.
            Err(SpecflowError::ProcessFailed {
                command: command.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }

    async fn check_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}

/// Test double shared by stage tests: records invocations, spawns nothing.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    pub(crate) struct RecordingRunner {
        pub calls: Arc<Mutex<Vec<Vec<String>>>>,
        pub exit_code: Option<i32>,
    }

    impl RecordingRunner {
        pub fn ok() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                exit_code: None,
            }
        }

        pub fn failing(exit_code: i32) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                exit_code: Some(exit_code),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(
            &self,
            command: &str,
            args: &[&str],
            _options: &RunOptions,
        ) -> Result<(), SpecflowError> {
            let mut line = vec![command.to_string()];
            line.extend(args.iter().map(|a| a.to_string()));
            self.calls.lock().unwrap().push(line);

            match self.exit_code {
                None => Ok(()),
                Some(code) => Err(SpecflowError::ProcessFailed {
                    command: command.to_string(),
                    code,
                }),
            }
        }

        async fn check_available(&self, _tool: &str) -> bool {
            true
        }
    }
}
