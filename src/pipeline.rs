// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Pipeline execution
//!
//! Runs stages strictly in declaration order with fail-fast semantics:
//! the first stage error aborts the run and becomes the pipeline's overall
//! failure. Each stage is wrapped in a named, collapsible logging scope.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::console::Group;
use crate::errors::SpecflowError;
use crate::stages::Stage;

/// Lifecycle of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Pending,
    Running { stage: String },
    Succeeded,
    Failed { stage: String },
}

/// Result of a completed pipeline run
#[derive(Debug)]
pub struct PipelineSummary {
    /// Names of stages that completed successfully, in order
    pub completed: Vec<String>,
    /// Total execution time
    pub duration: Duration,
}

/// An ordered, fail-fast sequence of stages
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            stages,
            state: PipelineState::Pending,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Execute all stages in order
    ///
    /// Stops at the first failing stage; stages after it never run.
    pub async fn execute(&mut self, config: &Config) -> Result<PipelineSummary, SpecflowError> {
        let start = Instant::now();
        let mut completed = Vec::new();

        for stage in &self.stages {
            let name = stage.name().to_string();
            self.state = PipelineState::Running { stage: name.clone() };

            let group = Group::open(&name);
            let stage_start = Instant::now();
            let result = stage.run(config).await;
            drop(group);

            match result {
                Ok(()) => {
                    println!(
                        "  {} {} ({:.2}s)",
                        "✓".green(),
                        name.bold(),
                        stage_start.elapsed().as_secs_f64()
                    );
                    completed.push(name);
                }
                Err(error) => {
                    println!("  {} {} failed", "✗".red(), name.bold());
                    self.state = PipelineState::Failed { stage: name };
                    return Err(error);
                }
            }
        }

        let duration = start.elapsed();
        self.state = PipelineState::Succeeded;

        println!();
        println!(
            "{}",
            format!(
                "Pipeline completed successfully in {:.2}s",
                duration.as_secs_f64()
            )
            .green()
        );

        Ok(PipelineSummary {
            completed,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigArgs};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    fn make_config() -> Config {
        Config::from_args(ConfigArgs {
            file: Some("spec.html".into()),
            manifest_url: String::new(),
            decision_url: String::new(),
            token: String::new(),
            cc: String::new(),
            event: "push".into(),
        })
    }

    /// Stage stub that records when it runs
    struct StubStage {
        name: &'static str,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Stage for StubStage {
        fn name(&self) -> &str {
            self.name
        }

        async fn run(&self, _config: &Config) -> Result<(), SpecflowError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                Err(SpecflowError::ProcessFailed {
                    command: self.name.to_string(),
                    code: 1,
                })
            } else {
                Ok(())
            }
        }
    }

    fn stub(name: &'static str, fail: bool, log: &Arc<Mutex<Vec<&'static str>>>) -> Box<dyn Stage> {
        Box::new(StubStage {
            name,
            fail,
            log: log.clone(),
        })
    }

    #[tokio::test]
    async fn test_stages_run_in_declaration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = Pipeline::new(vec![
            stub("first", false, &log),
            stub("second", false, &log),
            stub("third", false, &log),
        ]);

        let summary = pipeline.execute(&make_config()).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(summary.completed, vec!["first", "second", "third"]);
        assert_eq!(*pipeline.state(), PipelineState::Succeeded);
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_stages() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = Pipeline::new(vec![
            stub("install", false, &log),
            stub("validate", true, &log),
            stub("publish", false, &log),
        ]);

        let result = pipeline.execute(&make_config()).await;

        assert!(matches!(
            result,
            Err(SpecflowError::ProcessFailed { code: 1, .. })
        ));
        // Publish never ran.
        assert_eq!(*log.lock().unwrap(), vec!["install", "validate"]);
        assert_eq!(
            *pipeline.state(),
            PipelineState::Failed {
                stage: "validate".into()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_pipeline_succeeds() {
        let mut pipeline = Pipeline::new(vec![]);
        let summary = pipeline.execute(&make_config()).await.unwrap();
        assert!(summary.completed.is_empty());
    }
}
