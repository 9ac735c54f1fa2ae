// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use container_build::{
    ComposeFlavor,
    ContainerBuildConfig,
    ContainerBuildTools,
    ContainerRuntimeType,
};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn tools(runtime: ContainerRuntimeType, compose: ComposeFlavor) -> ContainerBuildTools {
    ContainerBuildTools::new(ContainerBuildConfig { runtime, compose })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_docker_image_build() {
    let task = tools(ContainerRuntimeType::Docker, ComposeFlavor::Plugin)
        .image_build_task(Path::new("/repo"), "acme:latest");

    assert_eq!(Path::new("/repo"), task.working_directory);
    assert_eq!("docker build --tag acme:latest .", task.command_line());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_podman_image_build() {
    let task = tools(ContainerRuntimeType::Podman, ComposeFlavor::Standalone)
        .image_build_task(Path::new("/repo"), "acme:latest");

    assert_eq!("podman build --tag acme:latest .", task.command_line());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_compose_build_plugin_vs_standalone() {
    let project_dir = Path::new("/repo/fixtures/dummy");

    let plugin = tools(ContainerRuntimeType::Docker, ComposeFlavor::Plugin)
        .compose_build_task(project_dir);
    assert_eq!(project_dir, plugin.working_directory);
    assert_eq!("docker compose build", plugin.command_line());

    let standalone = tools(ContainerRuntimeType::Docker, ComposeFlavor::Standalone)
        .compose_build_task(project_dir);
    assert_eq!("docker-compose build", standalone.command_line());

    let podman = tools(ContainerRuntimeType::Podman, ComposeFlavor::Standalone)
        .compose_build_task(project_dir);
    assert_eq!("podman-compose build", podman.command_line());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_default_compose_flavor_follows_runtime() {
    assert_eq!(
        ComposeFlavor::Plugin,
        ComposeFlavor::default_for(ContainerRuntimeType::Docker),
    );
    assert_eq!(
        ComposeFlavor::Standalone,
        ComposeFlavor::default_for(ContainerRuntimeType::Podman),
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_runtime_type_display() {
    assert_eq!("docker", ContainerRuntimeType::Docker.to_string());
    assert_eq!("podman", ContainerRuntimeType::Podman.to_string());
}
