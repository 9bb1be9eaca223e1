// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Error types for the publication pipeline
//!
//! Every failure in the pipeline is terminal: the first error aborts the
//! remaining stages and is surfaced to the operator with enough context
//! (command line, exit code, or network cause) to diagnose without re-running.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for specflow operations
pub type SpecflowResult<T> = Result<T, SpecflowError>;

/// Main error type for specflow
#[derive(Error, Debug, Diagnostic)]
pub enum SpecflowError {
    // ─────────────────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Tool '{tool}' not found")]
    #[diagnostic(
        code(specflow::tool_not_found),
        help("{suggestion}")
    )]
    ToolNotFound {
        tool: String,
        suggestion: String,
    },

    #[error("Command '{command}' exited with status code {code}")]
    #[diagnostic(
        code(specflow::process_failed),
        help("The command's output was streamed above; scroll up for details")
    )]
    ProcessFailed { command: String, code: i32 },

    #[error("Failed to spawn '{command}'")]
    #[diagnostic(
        code(specflow::spawn_failed),
        help("Check that '{command}' exists and is executable")
    )]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Input file not found: {path}")]
    #[diagnostic(
        code(specflow::file_not_found),
        help("Set INPUT_FILE (or --file) to the spec document to validate")
    )]
    FileNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // Network Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Request to '{url}' failed")]
    #[diagnostic(code(specflow::network_error))]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response declared application/json but the body is not valid JSON")]
    #[diagnostic(code(specflow::json_decode_error))]
    JsonDecode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body")]
    #[diagnostic(code(specflow::form_encode_error))]
    FormEncode {
        #[source]
        source: serde_urlencoded::ser::Error,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(specflow::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for SpecflowError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl SpecflowError {
    /// Create a tool not found error with installation suggestion
    pub fn tool_not_found(tool: &str) -> Self {
        let suggestion = match tool {
            "npm" => "Install Node.js (which ships npm): https://nodejs.org/".to_string(),
            _ => format!("Install {} and ensure it's in your PATH", tool),
        };

        Self::ToolNotFound {
            tool: tool.to_string(),
            suggestion,
        }
    }
}
