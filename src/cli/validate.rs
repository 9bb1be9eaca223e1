// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Validate command - install the validator and check the document

use miette::Result;

use crate::config::{Config, ConfigArgs};
use crate::console;
use crate::pipeline::Pipeline;
use crate::process::SystemRunner;
use crate::stages::{InstallStage, ValidateStage};

/// Run the pipeline prefix that stops before publication
pub async fn run(args: ConfigArgs, verbose: bool) -> Result<()> {
    let config = Config::from_args(args);
    super::run::require_input_file(&config)?;

    if verbose {
        console::print_info(&format!("Configuration: {:?}", config));
    }

    let mut pipeline = Pipeline::new(vec![
        Box::new(InstallStage::new(Box::new(SystemRunner::new()))),
        Box::new(ValidateStage::new(Box::new(SystemRunner::new()))),
    ]);

    super::run::execute(&mut pipeline, &config).await
}
