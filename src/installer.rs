// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Dependency installation
//!
//! The validator is an npm package, fetched into the working directory at
//! the start of every run. This is a thin pass-through to `npm install`:
//! no version pinning, no lockfile handling.

use tracing::debug;

use crate::errors::SpecflowError;
use crate::process::{CommandRunner, RunOptions};

/// Installs npm packages via a [`CommandRunner`]
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Install the named packages into ./node_modules
    pub async fn install(&self, dependencies: &[&str]) -> Result<(), SpecflowError> {
        if !self.runner.check_available("npm").await {
            return Err(SpecflowError::tool_not_found("npm"));
        }

        debug!(?dependencies, "installing npm packages");

        let mut args = vec!["install", "--silent"];
        args.extend_from_slice(dependencies);

        self.runner.run("npm", &args, &RunOptions::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::RecordingRunner;

    #[tokio::test]
    async fn test_install_invokes_npm_quietly() {
        let runner = RecordingRunner::ok();
        let calls = runner.calls.clone();

        Installer::new(&runner)
            .install(&["respec", "respec-validator"])
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[0],
            vec!["npm", "install", "--silent", "respec", "respec-validator"]
        );
    }

    #[tokio::test]
    async fn test_install_propagates_process_failure() {
        let runner = RecordingRunner::failing(1);

        let result = Installer::new(&runner).install(&["respec"]).await;
        assert!(matches!(
            result,
            Err(SpecflowError::ProcessFailed { code: 1, .. })
        ));
    }
}
