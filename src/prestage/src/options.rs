// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// What `prepare()` does when a build tool runs but exits non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildFailurePolicy {
    /// Log a warning and carry on. The suite then runs against whatever
    /// image state already exists locally, which may be stale or missing
    /// entirely on a clean checkout.
    #[default]
    Ignore,
    /// Abort the suite-start hook with a diagnostic naming the failed build
    Abort,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(bon::Builder, Debug, Clone, Default)]
pub struct PrepareOptions {
    #[builder(default)]
    pub on_build_failure: BuildFailurePolicy,

    /// Upper bound on a single build task. Unset means a task may hold the
    /// suite-start hook indefinitely.
    pub task_timeout: Option<Duration>,
}
