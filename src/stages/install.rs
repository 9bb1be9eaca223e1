// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Install stage
//!
//! Fetches the validator toolchain into ./node_modules so the Validate
//! stage can invoke it.

use async_trait::async_trait;

use super::Stage;
use crate::config::Config;
use crate::errors::SpecflowError;
use crate::installer::Installer;
use crate::process::CommandRunner;

/// Packages the Validate stage needs
pub const DEPENDENCIES: &[&str] = &["respec", "respec-validator"];

/// Installs the validator and its runtime
pub struct InstallStage {
    runner: Box<dyn CommandRunner>,
}

impl InstallStage {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Stage for InstallStage {
    fn name(&self) -> &str {
        "Install dependencies"
    }

    async fn run(&self, _config: &Config) -> Result<(), SpecflowError> {
        Installer::new(self.runner.as_ref()).install(DEPENDENCIES).await
    }
}
