//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs a single test case against the external tool: it spawns
//! the assembled invocation, classifies the outcome, persists the captured
//! output, and compares it against the stored answer.
//!
//! 此模块针对外部工具运行单个测试用例：启动组装好的调用命令、
//! 对结果进行分类、持久化捕获的输出，并将其与存储的答案进行比较。

use std::io;
use std::time::Instant;

use crate::core::error::ExecutionError;
use crate::core::models::{TestCase, TestResult};
use crate::infra::command;
use crate::infra::fs::write_text;

/// Runs one test case to completion and classifies the result.
///
/// The protocol, in order: spawn the invocation and wait for it to exit; a
/// spawn failure or a non-zero exit status means the tool could not be
/// started; any content on the error stream is a hard failure regardless of
/// the exit status; otherwise the standard output is captured (lines trimmed,
/// empties dropped), always written to the case's output path, and compared
/// to the stored answer by exact equality. A mismatch is a normal `Failed`
/// outcome, never an error.
///
/// 将一个测试用例运行到结束并对结果进行分类。
///
/// 协议顺序：启动调用命令并等待其退出；启动失败或非零退出状态意味着
/// 工具无法启动；错误流上的任何内容都是硬失败，与退出状态无关；
/// 否则捕获标准输出（修剪行、丢弃空行），始终写入用例的输出路径，
/// 并与存储的答案进行精确相等比较。不匹配是正常的 `Failed` 结果，
/// 绝不是错误。
pub async fn run_test_case(case: TestCase) -> Result<TestResult, ExecutionError> {
    let start_time = Instant::now();

    let expanded =
        shellexpand::full(&case.invocation).map_err(|_| ExecutionError::Invocation {
            invocation: case.invocation.clone(),
        })?;

    let parts = shlex::split(&expanded).ok_or_else(|| ExecutionError::Invocation {
        invocation: case.invocation.clone(),
    })?;

    let (program, args) = match parts.split_first() {
        Some(split) => split,
        None => {
            return Err(ExecutionError::Invocation {
                invocation: case.invocation.clone(),
            });
        }
    };

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).kill_on_drop(true);

    let captured = command::spawn_and_capture(cmd).await;

    let status = match captured.status {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ExecutionError::Restricted { source: e });
        }
        Err(e) => {
            return Err(ExecutionError::Spawn {
                invocation: case.invocation.clone(),
                source: e,
            });
        }
    };

    // Status first, then the error stream, matching the original protocol.
    // 先检查状态，再检查错误流，与原始协议一致。
    if !status.success() {
        return Err(ExecutionError::Exit {
            invocation: case.invocation.clone(),
            status,
        });
    }

    if !captured.stderr.is_empty() {
        return Err(ExecutionError::Stderr {
            text: captured.stderr.trim_end_matches('\n').to_string(),
        });
    }

    // Trim-and-join capture: the stdout-side mirror of the normalizer.
    // 修剪并连接的捕获：标准输出侧对规范化器的镜像。
    let mut captured_output = String::with_capacity(captured.stdout.len());
    for line in captured.stdout.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            captured_output.push_str(trimmed);
            captured_output.push('\n');
        }
    }

    // Actual results are persisted whether the comparison passes or fails.
    // 无论比较通过与否，实际结果都会被持久化。
    write_text(&case.output_path, &captured_output).map_err(|source| {
        ExecutionError::OutputWrite {
            path: case.output_path.clone(),
            source,
        }
    })?;

    let duration = start_time.elapsed();
    if captured_output == case.answer {
        Ok(TestResult::Passed { case, duration })
    } else {
        Ok(TestResult::Failed {
            case,
            actual: captured_output,
            duration,
        })
    }
}
