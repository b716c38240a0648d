//! # Error Types Module / 错误类型模块
//!
//! This module defines the typed error taxonomy of the runner: problems with
//! the plan document itself (`PlanError`) and problems driving the external
//! tool (`ExecutionError`). A comparison mismatch is not an error; it is a
//! normal per-test outcome carried by `TestResult`.
//!
//! 此模块定义了运行器的类型化错误分类：测试计划文档本身的问题（`PlanError`）
//! 以及驱动外部工具的问题（`ExecutionError`）。比较不匹配不是错误；
//! 它是由 `TestResult` 承载的正常单测试结果。

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A malformed or incomplete test plan. Always fatal to the whole run.
/// 格式错误或不完整的测试计划。对整个运行始终是致命的。
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan document contains no test elements at all.
    /// 计划文档中根本不包含任何测试元素。
    #[error("unable to find tests in the plan document")]
    Empty,

    /// A test element is missing a parseable `order` attribute.
    /// 测试元素缺少可解析的 `order` 属性。
    #[error("test element has a missing or invalid 'order' attribute: '{value}'")]
    InvalidOrder { value: String },

    /// An INPUT or OUTPUT element has no usable `name` attribute.
    /// INPUT 或 OUTPUT 元素没有可用的 `name` 属性。
    #[error("{element} element without a 'name' attribute - test# {order}")]
    MissingName { element: &'static str, order: i32 },

    /// A test element declared more than one ANSWER.
    /// 测试元素声明了多个 ANSWER。
    #[error("cannot have multiple answers - test# {order}")]
    DuplicateAnswer { order: i32 },

    /// A test element declared no OUTPUT destination.
    /// 测试元素未声明 OUTPUT 目标。
    #[error("no output file specified for test# {order}")]
    MissingOutput { order: i32 },

    /// A fixture file could not be written while loading the plan.
    /// 加载计划时无法写入输入文件。
    #[error("failed to write fixture file '{}'", path.display())]
    FixtureWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A failure to drive the external tool. Fatal to the whole run; a test that
/// merely produces the wrong output is reported through `TestResult` instead.
/// 驱动外部工具失败。对整个运行是致命的；仅产生错误输出的测试
/// 改为通过 `TestResult` 报告。
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The invocation string could not be split into a program and arguments.
    /// 调用字符串无法拆分为程序和参数。
    #[error("invalid tool invocation: '{invocation}'")]
    Invocation { invocation: String },

    /// The process could not be spawned at all.
    /// 进程根本无法启动。
    #[error("unable to start tool '{invocation}'")]
    Spawn {
        invocation: String,
        #[source]
        source: io::Error,
    },

    /// The tool exited with a non-zero status.
    /// 工具以非零状态退出。
    #[error("unable to start tool '{invocation}' (exit status: {status})")]
    Exit {
        invocation: String,
        status: ExitStatus,
    },

    /// The tool wrote to its error stream. Any diagnostic output there is a
    /// hard failure, regardless of the exit status.
    /// 工具向其错误流写入了内容。那里的任何诊断输出都是硬失败，
    /// 与退出状态无关。
    #[error("tool reported errors:\n{text}")]
    Stderr { text: String },

    /// Process spawning was denied by the execution environment.
    /// 执行环境拒绝了进程启动。
    #[error("unable to make system call: spawning denied by the execution environment")]
    Restricted {
        #[source]
        source: io::Error,
    },

    /// The captured output could not be persisted.
    /// 无法持久化捕获的输出。
    #[error("failed to write output file '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
