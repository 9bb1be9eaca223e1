// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Pipeline stages
//!
//! This module provides the stage trait and the three concrete units of
//! work: install the validator, validate the document, publish it.

mod install;
mod publish;
mod validate;

pub use install::InstallStage;
pub use publish::PublishStage;
pub use validate::ValidateStage;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::SpecflowError;

/// One discrete unit of pipeline work
#[async_trait]
pub trait Stage: Send + Sync {
    /// Stage name, used for the log group and status lines
    fn name(&self) -> &str;

    /// Run the stage to completion
    async fn run(&self, config: &Config) -> Result<(), SpecflowError>;
}
