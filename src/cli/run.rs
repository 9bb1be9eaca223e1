// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Run command - execute the full pipeline

use miette::Result;

use crate::config::{Config, ConfigArgs};
use crate::console;
use crate::http::ReqwestClient;
use crate::pipeline::Pipeline;
use crate::process::SystemRunner;
use crate::stages::{InstallStage, PublishStage, ValidateStage};

/// Run the full pipeline: install, validate, publish
pub async fn run(args: ConfigArgs, verbose: bool) -> Result<()> {
    let config = Config::from_args(args);
    require_input_file(&config)?;

    if verbose {
        console::print_info(&format!("Configuration: {:?}", config));
    }

    let mut pipeline = Pipeline::new(vec![
        Box::new(InstallStage::new(Box::new(SystemRunner::new()))),
        Box::new(ValidateStage::new(Box::new(SystemRunner::new()))),
        Box::new(PublishStage::new(Box::new(ReqwestClient::new()))),
    ]);

    execute(&mut pipeline, &config).await
}

/// Commands that validate need an input document before anything runs
pub(crate) fn require_input_file(config: &Config) -> Result<()> {
    if config.file.is_none() {
        return Err(miette::miette!(
            "No input file given.\n\n\
             Set INPUT_FILE or pass --file <FILE> pointing at the spec document."
        ));
    }
    Ok(())
}

/// Execute a pipeline and report the outcome to the host
pub(crate) async fn execute(pipeline: &mut Pipeline, config: &Config) -> Result<()> {
    match pipeline.execute(config).await {
        Ok(_) => Ok(()),
        Err(error) => {
            // Mark the run as failed in the Actions UI before the
            // non-zero exit.
            console::error_annotation(&error.to_string());
            Err(error.into())
        }
    }
}
