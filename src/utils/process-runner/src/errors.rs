// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::backtrace::Backtrace;

use thiserror::Error;

use crate::ProcessTask;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ProcessRunError {
    #[error(transparent)]
    Launch(#[from] ProcessLaunchError),
}

impl ProcessRunError {
    pub fn launch(task: ProcessTask, source: std::io::Error) -> Self {
        ProcessLaunchError {
            task,
            source,
            backtrace: Backtrace::capture(),
        }
        .into()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The process could not be started at all: the program is missing, not
/// executable, or the working directory does not exist
#[derive(Error, Debug)]
#[error("Failed to launch '{}' in {}", .task.command_line(), .task.working_directory.display())]
pub struct ProcessLaunchError {
    pub task: ProcessTask,
    #[source]
    pub source: std::io::Error,
    pub backtrace: Backtrace,
}
