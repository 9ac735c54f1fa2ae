// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use container_build::ContainerBuildTools;

use crate::{BuildStack, BuildTask};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Tag under which the primary application image is published into the
/// local image store
pub const TESTBED_PRIMARY_IMAGE_TAG: &str = "prestage-testbed:latest";

/// Fixture environment with several cooperating services
pub const TESTBED_FIXTURE_DUMMY_DIR: &str = "dummy";

/// Fixture environment with a standalone web service
pub const TESTBED_FIXTURE_DUMMY_WEB_DIR: &str = "dummy-web";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The canonical build stack: the primary image from the testbed root, then
/// each fixture environment, in that order
pub fn testbed_build_stack(tools: &ContainerBuildTools, testbed_root: &Path) -> BuildStack {
    BuildStack::new(vec![
        BuildTask::new(
            "primary-image",
            tools.image_build_task(testbed_root, TESTBED_PRIMARY_IMAGE_TAG),
        ),
        BuildTask::new(
            "fixture-dummy",
            tools.compose_build_task(&testbed_root.join(TESTBED_FIXTURE_DUMMY_DIR)),
        ),
        BuildTask::new(
            "fixture-dummy-web",
            tools.compose_build_task(&testbed_root.join(TESTBED_FIXTURE_DUMMY_WEB_DIR)),
        ),
    ])
}
