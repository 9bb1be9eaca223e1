// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Validate stage
//!
//! Runs the locally-installed validator against the input document. The
//! file-existence check happens before anything is spawned so a missing
//! path reads as a configuration mistake, not a tool failure.

use async_trait::async_trait;
use std::path::Path;

use super::Stage;
use crate::config::Config;
use crate::errors::SpecflowError;
use crate::process::{CommandRunner, RunOptions};

/// Validator binary, as installed by the Install stage
pub const VALIDATOR_BIN: &str = "./node_modules/.bin/respec-validator";

/// Validates the spec document
pub struct ValidateStage {
    runner: Box<dyn CommandRunner>,
}

impl ValidateStage {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Stage for ValidateStage {
    fn name(&self) -> &str {
        "Validate spec"
    }

    async fn run(&self, config: &Config) -> Result<(), SpecflowError> {
        // An unconfigured input reads as an empty path, which never exists.
        let file = config.file.as_deref().unwrap_or(Path::new(""));

        if !file.exists() {
            return Err(SpecflowError::FileNotFound {
                path: file.to_path_buf(),
            });
        }

        // Exit 0 means the document is valid; any other exit means invalid
        // or validator error, and the pipeline does not tell those apart.
        let file = file.to_string_lossy();
        self.runner
            .run(VALIDATOR_BIN, &[file.as_ref()], &RunOptions::default())
            .await
    }
}
