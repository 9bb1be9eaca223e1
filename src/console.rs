// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Console output helpers
//!
//! When running under GitHub Actions the runner understands workflow
//! commands: `::group::`/`::endgroup::` fold log sections, `::error::`
//! marks the run as failed in the UI. Outside Actions the same calls fall
//! back to plain styled output.

use colored::Colorize;

/// Whether we are running inside a GitHub Actions step
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

/// A named, collapsible logging scope
///
/// Opens the group on construction and closes it unconditionally on drop,
/// so a scope is closed on every exit path, including early returns.
pub struct Group {
    github: bool,
}

impl Group {
    pub fn open(name: &str) -> Self {
        let github = is_github_actions();
        if github {
            println!("::group::{}", name);
        } else {
            println!();
            println!("{}", name.bold());
            println!("{}", "═".repeat(name.len().max(40)));
        }
        Self { github }
    }
}

impl Drop for Group {
    fn drop(&mut self) {
        if self.github {
            println!("::endgroup::");
        }
    }
}

/// Report a fatal error to the host
///
/// Under GitHub Actions this emits an `::error::` annotation so the run is
/// marked failed; the non-zero exit status is handled by the caller.
pub fn error_annotation(message: &str) {
    if is_github_actions() {
        // Workflow commands are single-line; fold the message.
        println!("::error::{}", message.replace('\n', " "));
    } else {
        eprintln!("{} {}", "✗".red(), message);
    }
}

/// Print an info item
pub fn print_info(msg: &str) {
    println!("  {} {}", "→".blue(), msg);
}
