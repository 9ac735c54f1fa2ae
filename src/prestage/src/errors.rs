// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::backtrace::Backtrace;
use std::time::Duration;

use process_runner::{ProcessOutcome, ProcessRunError, ProcessTask};
use thiserror::Error;

use crate::BuildTask;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum PrepareError {
    #[error(transparent)]
    TaskLaunch(#[from] TaskLaunchError),

    #[error(transparent)]
    BuildFailed(#[from] BuildTaskFailedError),

    #[error(transparent)]
    TaskTimeout(#[from] TaskTimeoutError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The external build tool could not be invoked at all
#[derive(Error, Debug)]
#[error("Build task '{task_name}' could not be launched")]
pub struct TaskLaunchError {
    pub task_name: &'static str,
    #[source]
    pub source: ProcessRunError,
    pub backtrace: Backtrace,
}

impl TaskLaunchError {
    pub fn new(task_name: &'static str, source: ProcessRunError) -> Self {
        Self {
            task_name,
            source,
            backtrace: Backtrace::capture(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The external build tool ran and reported failure
#[derive(Error, Debug)]
pub struct BuildTaskFailedError {
    pub task_name: &'static str,
    pub process: ProcessTask,
    pub exit_code: Option<i32>,
    pub stderr: String,
    pub backtrace: Backtrace,
}

impl BuildTaskFailedError {
    pub fn new(task: &BuildTask, outcome: &ProcessOutcome) -> Self {
        Self {
            task_name: task.name,
            process: task.process.clone(),
            exit_code: outcome.exit_code,
            stderr: outcome.stderr.clone(),
            backtrace: Backtrace::capture(),
        }
    }
}

impl std::fmt::Display for BuildTaskFailedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Build task '{}' failed with exit code {:?}",
            self.task_name, self.exit_code,
        )?;
        writeln!(f, "- {}", self.process)?;
        if !self.stderr.is_empty() {
            writeln!(f, "- STDERR: {}", self.stderr)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The external build tool exceeded the configured per-task time budget
#[derive(Error, Debug)]
#[error("Build task '{task_name}' timed out after {duration:?}")]
pub struct TaskTimeoutError {
    pub task_name: &'static str,
    pub duration: Duration,
    pub backtrace: Backtrace,
}

impl TaskTimeoutError {
    pub fn new(task_name: &'static str, duration: Duration) -> Self {
        Self {
            task_name,
            duration,
            backtrace: Backtrace::capture(),
        }
    }
}
