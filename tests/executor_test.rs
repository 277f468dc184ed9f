// Integration tests for command executors
//
// These spawn real shell processes, so they are gated to Unix hosts where sh
// and the base64 utility are available.

#![cfg(unix)]

use std::fs;
use std::sync::Arc;

use jikko::executor::{
    Base64Executor, CommandExecutor, ExecutorError, ExecutorFactory, ExecutorType, PlainExecutor,
    ShellType,
};
use jikko::logging::{LogLevel, Logger};

fn quiet_logger() -> Arc<Logger> {
    Arc::new(Logger::with_color(LogLevel::Fatal, false))
}

#[tokio::test]
async fn test_plain_executor_runs_command_through_sh() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("out.txt");

    let executor = PlainExecutor::new(ShellType::Sh, &quiet_logger());
    let command = format!("echo hello > {}", marker.display());
    executor.execute(&command).await.expect("command should succeed");

    let contents = fs::read_to_string(&marker).expect("marker file should exist");
    assert_eq!(contents.trim(), "hello");
}

#[tokio::test]
async fn test_plain_executor_propagates_child_failure() {
    let executor = PlainExecutor::new(ShellType::Sh, &quiet_logger());
    let result = executor.execute("exit 3").await;
    assert!(matches!(result, Err(ExecutorError::Execution(_))));
}

#[tokio::test]
async fn test_plain_executor_fails_when_program_is_missing() {
    let executor = PlainExecutor::new(ShellType::Sh, &quiet_logger());
    let result = executor.execute("nonexistent_command_xyz_12345").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_base64_executor_runs_encoded_command_through_pipe() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("out.txt");

    let executor = Base64Executor::new(ShellType::Sh, &quiet_logger());
    let encoded = executor.encode(&format!("echo encoded > {}", marker.display()));
    executor.execute(&encoded).await.expect("encoded command should succeed");

    let contents = fs::read_to_string(&marker).expect("marker file should exist");
    assert_eq!(contents.trim(), "encoded");
}

#[tokio::test]
async fn test_base64_executor_with_auto_shell_resolves_to_sh() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("out.txt");

    let executor = Base64Executor::new(ShellType::Auto, &quiet_logger());
    let encoded = executor.encode(&format!("echo auto > {}", marker.display()));
    executor.execute(&encoded).await.expect("encoded command should succeed");

    assert_eq!(fs::read_to_string(&marker).expect("marker file").trim(), "auto");
}

#[tokio::test]
async fn test_factory_built_executor_round_trips_through_execution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("out.txt");

    let logger = quiet_logger();
    let factory = ExecutorFactory::new(&logger);
    let executor = factory.create(ExecutorType::Base64, ShellType::Sh);

    let command = format!("printf ok > {}", marker.display());
    let encoded = executor.encode(&command);
    assert_eq!(executor.decode(&encoded).expect("decode"), command);

    executor.execute(&encoded).await.expect("command should succeed");
    assert_eq!(fs::read_to_string(&marker).expect("marker file"), "ok");
}
