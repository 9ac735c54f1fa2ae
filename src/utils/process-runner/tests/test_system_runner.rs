// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use pretty_assertions::{assert_eq, assert_matches};
use process_runner::{ProcessRunError, ProcessRunner, ProcessTask, SystemProcessRunner};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_captures_exit_code_and_output() {
    let runner = SystemProcessRunner::new();
    let scratch_dir = tempfile::tempdir().unwrap();

    let task = ProcessTask::new(
        scratch_dir.path(),
        "sh",
        ["-c", "echo out; echo err >&2; exit 7"],
    );
    let outcome = runner.run(&task).await.unwrap();

    assert_eq!(Some(7), outcome.exit_code);
    assert!(!outcome.success());
    assert_eq!("out\n", outcome.stdout);
    assert_eq!("err\n", outcome.stderr);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_zero_exit_is_success() {
    let runner = SystemProcessRunner::new();
    let scratch_dir = tempfile::tempdir().unwrap();

    let task = ProcessTask::new(scratch_dir.path(), "true", Vec::<String>::new());
    let outcome = runner.run(&task).await.unwrap();

    assert_eq!(Some(0), outcome.exit_code);
    assert!(outcome.success());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_runs_from_the_given_working_directory() {
    let runner = SystemProcessRunner::new();
    let scratch_dir = tempfile::tempdir().unwrap();

    let task = ProcessTask::new(scratch_dir.path(), "pwd", Vec::<String>::new());
    let outcome = runner.run(&task).await.unwrap();

    let reported = PathBuf::from(outcome.stdout.trim());
    assert_eq!(
        scratch_dir.path().canonicalize().unwrap(),
        reported.canonicalize().unwrap(),
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_missing_program_is_a_launch_error() {
    let runner = SystemProcessRunner::new();
    let scratch_dir = tempfile::tempdir().unwrap();

    let task = ProcessTask::new(
        scratch_dir.path(),
        "prestage-no-such-program",
        Vec::<String>::new(),
    );
    let res = runner.run(&task).await;

    assert_matches!(res, Err(ProcessRunError::Launch(_)));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_missing_working_directory_is_a_launch_error() {
    let runner = SystemProcessRunner::new();
    let scratch_dir = tempfile::tempdir().unwrap();

    let task = ProcessTask::new(
        scratch_dir.path().join("does-not-exist"),
        "true",
        Vec::<String>::new(),
    );
    let res = runner.run(&task).await;

    assert_matches!(res, Err(ProcessRunError::Launch(_)));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_command_line_rendering() {
    let task = ProcessTask::new("/repo", "docker", ["build", "--tag", "acme:latest", "."]);

    assert_eq!("docker build --tag acme:latest .", task.command_line());
    assert_eq!("docker build --tag acme:latest .", task.to_string());
}
