// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Publish command - request publication without re-validating

use miette::Result;

use crate::config::{Config, ConfigArgs};
use crate::console;
use crate::http::ReqwestClient;
use crate::pipeline::Pipeline;
use crate::stages::PublishStage;

/// Run only the Publish stage
pub async fn run(args: ConfigArgs, verbose: bool) -> Result<()> {
    let config = Config::from_args(args);

    if verbose {
        console::print_info(&format!("Configuration: {:?}", config));
    }

    let mut pipeline = Pipeline::new(vec![Box::new(PublishStage::new(Box::new(
        ReqwestClient::new(),
    )))]);

    super::run::execute(&mut pipeline, &config).await
}
