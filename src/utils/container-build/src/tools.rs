// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use dill::component;
use process_runner::ProcessTask;

use crate::{ComposeFlavor, ContainerBuildConfig, ContainerRuntimeType};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Produces the concrete build invocations for the configured container
/// runtime
#[derive(Debug, Clone, Default)]
pub struct ContainerBuildTools {
    config: ContainerBuildConfig,
}

#[component(pub)]
impl ContainerBuildTools {
    pub fn new(config: ContainerBuildConfig) -> Self {
        Self { config }
    }

    fn runtime_program(&self) -> &'static str {
        match self.config.runtime {
            ContainerRuntimeType::Docker => "docker",
            ContainerRuntimeType::Podman => "podman",
        }
    }

    /// `<runtime> build --tag <tag> .` issued from the image context
    /// directory
    pub fn image_build_task(&self, context_dir: &Path, tag: &str) -> ProcessTask {
        ProcessTask::new(
            context_dir,
            self.runtime_program(),
            ["build", "--tag", tag, "."],
        )
    }

    /// Compose `build` issued from the directory that holds the compose
    /// definition
    pub fn compose_build_task(&self, project_dir: &Path) -> ProcessTask {
        match self.config.compose {
            ComposeFlavor::Plugin => {
                ProcessTask::new(project_dir, self.runtime_program(), ["compose", "build"])
            }
            ComposeFlavor::Standalone => {
                let program = match self.config.runtime {
                    ContainerRuntimeType::Docker => "docker-compose",
                    ContainerRuntimeType::Podman => "podman-compose",
                };
                ProcessTask::new(project_dir, program, ["build"])
            }
        }
    }
}
