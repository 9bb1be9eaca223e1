// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! # specflow - Spec validation and publication pipeline
//!
//! `specflow` validates a spec document with respec-validator and submits
//! it to the W3C Echidna publication service, as a fail-fast sequential
//! pipeline: Install, Validate, Publish.
//!
//! ## Quick Start
//!
//! ```bash
//! # Full pipeline: install the validator, validate, publish
//! specflow run --file index.html
//!
//! # Local pre-flight, no publication
//! specflow validate --file index.html
//!
//! # Re-request publication of an already-validated document
//! specflow publish
//! ```
//!
//! Pull-request runs never publish: the Publish stage short-circuits to
//! success without a network call.

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod http;
pub mod installer;
pub mod pipeline;
pub mod process;
pub mod stages;

// Re-export commonly used types
pub use config::{Config, TriggerEvent};
pub use errors::{SpecflowError, SpecflowResult};
pub use pipeline::{Pipeline, PipelineState, PipelineSummary};
pub use stages::Stage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
