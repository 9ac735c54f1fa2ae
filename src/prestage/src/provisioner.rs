// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface, meta, scope, Singleton};
use process_runner::ProcessRunner;
use suite_lifecycle::{BoxedError, SuiteStartHook, SuiteStartHookMeta};

use crate::{
    BuildFailurePolicy,
    BuildStack,
    BuildTask,
    BuildTaskFailedError,
    PrepareError,
    PrepareOptions,
    TaskLaunchError,
    TaskTimeoutError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const HOOK_PRESTAGE_ENVIRONMENT_PROVISIONER: &str = "dev.prestage.EnvironmentProvisioner";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs the suite's [`BuildStack`] before the first test case executes:
/// every build task, strictly in declaration order, each awaited to process
/// exit before the next one is spawned.
pub struct EnvironmentProvisioner {
    process_runner: Arc<dyn ProcessRunner>,
    stack: Arc<BuildStack>,
    options: PrepareOptions,
}

#[component(pub)]
#[interface(dyn SuiteStartHook)]
#[meta(SuiteStartHookMeta {
    hook_name: HOOK_PRESTAGE_ENVIRONMENT_PROVISIONER,
    depends_on: &[],
})]
#[scope(Singleton)]
impl EnvironmentProvisioner {
    pub fn new(
        process_runner: Arc<dyn ProcessRunner>,
        stack: Arc<BuildStack>,
        options: PrepareOptions,
    ) -> Self {
        Self {
            process_runner,
            stack,
            options,
        }
    }

    /// Provisions the environment: images are created or refreshed in the
    /// local image store as a side effect of the external build tool runs.
    /// Holds the caller until the last build process has exited.
    #[tracing::instrument(level = "info", skip_all, name = "EnvironmentProvisioner::prepare")]
    pub async fn prepare(&self) -> Result<(), PrepareError> {
        tracing::info!(num_tasks = self.stack.len(), "Provisioning suite environment");

        for task in self.stack.tasks() {
            self.run_build_task(task).await?;
        }

        Ok(())
    }

    async fn run_build_task(&self, task: &BuildTask) -> Result<(), PrepareError> {
        tracing::info!(
            task_name = task.name,
            working_directory = %task.process.working_directory.display(),
            command = %task.process.command_line(),
            "Running build task",
        );

        let run = self.process_runner.run(&task.process);

        let run_result = match self.options.task_timeout {
            None => run.await,
            Some(duration) => match tokio::time::timeout(duration, run).await {
                Ok(run_result) => run_result,
                Err(_) => return Err(TaskTimeoutError::new(task.name, duration).into()),
            },
        };

        let outcome = run_result.map_err(|e| TaskLaunchError::new(task.name, e))?;

        if outcome.success() {
            tracing::info!(task_name = task.name, "Build task finished");
            return Ok(());
        }

        match self.options.on_build_failure {
            BuildFailurePolicy::Ignore => {
                // The suite proceeds against whatever image state already
                // exists locally
                tracing::warn!(
                    task_name = task.name,
                    exit_code = ?outcome.exit_code,
                    stderr = %outcome.stderr,
                    "Build task failed - continuing",
                );
                Ok(())
            }
            BuildFailurePolicy::Abort => Err(BuildTaskFailedError::new(task, &outcome).into()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SuiteStartHook for EnvironmentProvisioner {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        name = "EnvironmentProvisioner::on_suite_start"
    )]
    async fn on_suite_start(&self) -> Result<(), BoxedError> {
        Ok(self.prepare().await?)
    }
}
