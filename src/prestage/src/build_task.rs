// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use process_runner::ProcessTask;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One directory-scoped invocation of the external build tooling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTask {
    pub name: &'static str,
    pub process: ProcessTask,
}

impl BuildTask {
    pub fn new(name: &'static str, process: ProcessTask) -> Self {
        Self { name, process }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The ordered set of builds a suite needs before its first test.
///
/// Order is declaration order and is preserved exactly - later builds may
/// rely on earlier images already being present in the local image cache.
#[derive(Debug, Clone, Default)]
pub struct BuildStack {
    tasks: Vec<BuildTask>,
}

impl BuildStack {
    pub fn new(tasks: Vec<BuildTask>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[BuildTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
