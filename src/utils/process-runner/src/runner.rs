// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;
use std::process::Stdio;

use dill::{component, interface};

use crate::ProcessRunError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single external invocation: what to run, with which arguments, and from
/// which working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTask {
    pub working_directory: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl ProcessTask {
    pub fn new<P, S, I, A>(working_directory: P, program: S, args: I) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            working_directory: working_directory.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Shell-style rendering for logs and diagnostics
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl std::fmt::Display for ProcessTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Captured result of a finished process. A non-zero exit is not an error at
/// this layer - callers decide what failure means for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<std::process::Output> for ProcessOutcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs the task to completion, holding the caller until the process has
    /// exited.
    async fn run(&self, task: &ProcessTask) -> Result<ProcessOutcome, ProcessRunError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs tasks as real local subprocesses
pub struct SystemProcessRunner {}

#[component(pub)]
#[interface(dyn ProcessRunner)]
impl SystemProcessRunner {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl ProcessRunner for SystemProcessRunner {
    #[tracing::instrument(level = "debug", skip_all, name = "SystemProcessRunner::run")]
    async fn run(&self, task: &ProcessTask) -> Result<ProcessOutcome, ProcessRunError> {
        tracing::debug!(
            working_directory = %task.working_directory.display(),
            command = %task.command_line(),
            "Spawning process",
        );

        let output = tokio::process::Command::new(&task.program)
            .args(&task.args)
            .current_dir(&task.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ProcessRunError::launch(task.clone(), e))?;

        let outcome = ProcessOutcome::from(output);
        tracing::debug!(exit_code = ?outcome.exit_code, "Process exited");

        Ok(outcome)
    }
}
