// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ENV_CONTAINER_RUNTIME_TYPE: &str = "PRESTAGE_CONTAINER_RUNTIME_TYPE";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerBuildConfig {
    pub runtime: ContainerRuntimeType,
    pub compose: ComposeFlavor,
}

impl Default for ContainerBuildConfig {
    fn default() -> Self {
        let runtime = std::env::var(ENV_CONTAINER_RUNTIME_TYPE)
            .map(|val| match val.as_str() {
                "docker" => ContainerRuntimeType::Docker,
                "podman" => ContainerRuntimeType::Podman,
                _ => panic!("Unrecognized container runtime type: {val}"),
            })
            .unwrap_or(ContainerRuntimeType::Docker);

        Self {
            runtime,
            compose: ComposeFlavor::default_for(runtime),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerRuntimeType {
    Docker,
    Podman,
}

impl std::fmt::Display for ContainerRuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContainerRuntimeType::Docker => "docker",
            ContainerRuntimeType::Podman => "podman",
        };
        write!(f, "{s}")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// How the compose orchestrator is invoked: as a CLI plugin of the runtime
/// binary (`docker compose`) or as a standalone program (`docker-compose`,
/// `podman-compose`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComposeFlavor {
    Plugin,
    Standalone,
}

impl ComposeFlavor {
    /// Docker ships compose as a plugin, podman installs ship the
    /// standalone `podman-compose`
    pub fn default_for(runtime: ContainerRuntimeType) -> Self {
        match runtime {
            ContainerRuntimeType::Docker => ComposeFlavor::Plugin,
            ContainerRuntimeType::Podman => ComposeFlavor::Standalone,
        }
    }
}
