//! # Executor Integration Tests / 执行器集成测试
//!
//! These tests drive the executor against real processes and verify the
//! classification protocol: start failures, error-stream sensitivity,
//! output capture, persistence, and comparison.
//!
//! 这些测试针对真实进程驱动执行器，并验证分类协议：
//! 启动失败、错误流敏感性、输出捕获、持久化和比较。

use regression_runner::core::error::ExecutionError;
use regression_runner::core::execution::run_test_case;
use regression_runner::core::models::{TestCase, TestCaseBuilder, TestResult};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds a ready-to-run case with no fixtures.
/// 构建一个没有输入文件、可直接运行的用例。
fn simple_case(invocation: &str, answer: &str, output_path: &Path) -> TestCase {
    let mut builder = TestCaseBuilder::new(1, None);
    builder.push_call(invocation);
    builder.set_output(output_path.to_path_buf());
    builder.set_answer(answer.to_string()).unwrap();
    builder.finish().unwrap()
}

#[tokio::test]
async fn test_matching_output_passes_and_is_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("echo hello", "hello\n", &out);

    let result = run_test_case(case).await.unwrap();
    assert!(matches!(result, TestResult::Passed { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
}

#[tokio::test]
async fn test_mismatching_output_fails_but_is_still_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("echo hello", "goodbye\n", &out);

    let result = run_test_case(case).await.unwrap();
    match result {
        TestResult::Failed { actual, .. } => {
            assert_eq!(actual, "hello\n");
            // Round-trip: the persisted bytes equal the compared capture.
            assert_eq!(fs::read_to_string(&out).unwrap(), actual);
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_capture_trims_lines_and_drops_empties() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case(
        r#"sh -c 'printf "  a  \n\n b \n"'"#,
        "a\nb\n",
        &out,
    );

    let result = run_test_case(case).await.unwrap();
    assert!(matches!(result, TestResult::Passed { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "a\nb\n");
}

#[tokio::test]
async fn test_stderr_content_is_a_hard_failure_even_on_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("sh -c 'echo oops 1>&2'", "", &out);

    let err = run_test_case(case).await.unwrap_err();
    match err {
        ExecutionError::Stderr { text } => assert_eq!(text, "oops"),
        other => panic!("Expected Stderr, got {:?}", other),
    }
    // No comparison happened, so nothing was persisted.
    assert!(!out.exists());
}

#[tokio::test]
async fn test_nonzero_exit_is_classified_as_unable_to_start() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("sh -c 'exit 3'", "", &out);

    let err = run_test_case(case).await.unwrap_err();
    match err {
        ExecutionError::Exit { status, .. } => assert_eq!(status.code(), Some(3)),
        other => panic!("Expected Exit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exit_status_is_checked_before_the_error_stream() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("sh -c 'echo bad 1>&2; exit 1'", "", &out);

    let err = run_test_case(case).await.unwrap_err();
    assert!(matches!(err, ExecutionError::Exit { .. }));
}

#[tokio::test]
async fn test_unknown_program_is_a_spawn_failure() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("definitely-not-a-real-tool-12345", "", &out);

    let err = run_test_case(case).await.unwrap_err();
    assert!(matches!(err, ExecutionError::Spawn { .. }));
}

#[tokio::test]
async fn test_empty_invocation_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("", "", &out);

    let err = run_test_case(case).await.unwrap_err();
    assert!(matches!(err, ExecutionError::Invocation { .. }));
}

#[tokio::test]
async fn test_empty_answer_matches_silent_tool() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");
    let case = simple_case("true", "", &out);

    let result = run_test_case(case).await.unwrap();
    assert!(matches!(result, TestResult::Passed { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
