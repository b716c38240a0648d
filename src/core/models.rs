//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures of the runner: the flat,
//! immutable `TestCase` record, the builder that assembles one during plan
//! loading, and the `TestResult` outcome of one executed case.
//!
//! 此模块定义了运行器的核心数据结构：扁平、不可变的 `TestCase` 记录、
//! 在加载计划期间组装它的构建器，以及单个已执行用例的 `TestResult` 结果。

use crate::core::error::PlanError;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// One test case from the plan, immutable once loaded.
/// Constructed exclusively through `TestCaseBuilder`, consumed once by the
/// executor; the only persistent artifacts are the fixture and output files
/// it names.
///
/// 来自计划的单个测试用例，加载后不可变。
/// 仅通过 `TestCaseBuilder` 构造，由执行器消费一次；
/// 唯一持久的产物是它所指定的输入文件和输出文件。
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    /// Primary sort key and display index, unique across the plan.
    /// 主排序键和显示索引，在整个计划中唯一。
    pub order: i32,
    /// Optional line tag (the plan's `chromosome` attribute); when present it
    /// is prefixed to every non-empty normalized fixture/answer line.
    /// 可选的行标签（计划的 `chromosome` 属性）；存在时会被添加到
    /// 每个非空规范化输入/答案行的前面。
    pub tag: Option<String>,
    /// The fully assembled external-tool command line, fixture files included
    /// as trailing arguments.
    /// 完整组装的外部工具命令行，输入文件作为尾随参数包含在内。
    pub invocation: String,
    /// Fixture files written while loading, in document order.
    /// 加载时写入的输入文件，按文档顺序排列。
    pub fixture_paths: Vec<PathBuf>,
    /// The normalized expected output. May be empty.
    /// 规范化的预期输出。可以为空。
    pub answer: String,
    /// Destination for the captured tool output.
    /// 捕获的工具输出的目标路径。
    pub output_path: PathBuf,
}

impl TestCase {
    /// The human-readable label printed before the case is run,
    /// e.g. `Test3: sort-tool --unique data.txt > out.txt`.
    /// 在运行用例之前打印的人类可读标签。
    pub fn label(&self) -> String {
        format!(
            "Test{}: {} > {}",
            self.order,
            self.invocation,
            self.output_path.display()
        )
    }
}

/// Accumulates the pieces of a `TestCase` while the loader visits a test
/// element's children, then finalizes once. Partially-built state never
/// escapes the loader.
///
/// 在加载器访问测试元素的子元素时累积 `TestCase` 的各个部分，
/// 然后一次性完成。部分构建的状态永远不会逃离加载器。
#[derive(Debug)]
pub struct TestCaseBuilder {
    order: i32,
    tag: Option<String>,
    invocation: String,
    fixture_paths: Vec<PathBuf>,
    answer: Option<String>,
    output_path: Option<PathBuf>,
}

impl TestCaseBuilder {
    pub fn new(order: i32, tag: Option<String>) -> Self {
        Self {
            order,
            tag,
            invocation: String::new(),
            fixture_paths: Vec::new(),
            answer: None,
            output_path: None,
        }
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    /// The tag to hand to the normalizer; `None` when absent or empty.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    /// Appends one CALL fragment. Fragments concatenate in document order.
    /// 追加一个 CALL 片段。片段按文档顺序连接。
    pub fn push_call(&mut self, fragment: &str) {
        self.invocation.push_str(fragment);
    }

    /// Records a fixture file already written to disk; it will be appended to
    /// the invocation as a trailing argument at finalization.
    /// 记录一个已写入磁盘的输入文件；在完成时它将作为尾随参数
    /// 追加到调用命令中。
    pub fn add_fixture(&mut self, path: PathBuf) {
        self.fixture_paths.push(path);
    }

    /// Records the output destination. A later declaration replaces an
    /// earlier one.
    /// 记录输出目标。后声明的会替换先声明的。
    pub fn set_output(&mut self, path: PathBuf) {
        self.output_path = Some(path);
    }

    /// Stores the (already normalized) expected answer.
    /// 存储（已规范化的）预期答案。
    pub fn set_answer(&mut self, answer: String) -> Result<(), PlanError> {
        if self.answer.is_some() {
            return Err(PlanError::DuplicateAnswer { order: self.order });
        }
        self.answer = Some(answer);
        Ok(())
    }

    /// Finalizes the case: appends the fixture paths to the invocation and
    /// validates that an output destination was declared. An absent ANSWER
    /// element means an empty expected answer.
    ///
    /// 完成用例：将输入文件路径追加到调用命令，并验证已声明输出目标。
    /// 缺少 ANSWER 元素意味着预期答案为空。
    pub fn finish(self) -> Result<TestCase, PlanError> {
        let mut invocation = self.invocation;
        for path in &self.fixture_paths {
            invocation.push(' ');
            invocation.push_str(&path.to_string_lossy());
        }

        let output_path = self
            .output_path
            .ok_or(PlanError::MissingOutput { order: self.order })?;

        Ok(TestCase {
            order: self.order,
            tag: self.tag,
            invocation,
            fixture_paths: self.fixture_paths,
            answer: self.answer.unwrap_or_default(),
            output_path,
        })
    }
}

/// The final outcome of a single executed test case.
/// A comparison mismatch is a `Failed` value, never an error: it is always
/// reported and never aborts the run.
///
/// 单个已执行测试用例的最终结果。
/// 比较不匹配是 `Failed` 值，绝不是错误：它总是被报告且从不中止运行。
#[derive(Debug, Clone, Serialize)]
pub enum TestResult {
    /// The captured output matched the stored answer exactly.
    /// 捕获的输出与存储的答案完全匹配。
    Passed { case: TestCase, duration: Duration },
    /// The tool ran cleanly but its output differed from the answer.
    /// 工具正常运行，但其输出与答案不同。
    Failed {
        case: TestCase,
        /// The captured output that mismatched; also persisted to the case's
        /// output path. / 不匹配的捕获输出；也会持久化到用例的输出路径。
        actual: String,
        duration: Duration,
    },
}

impl TestResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed { .. })
    }

    pub fn case(&self) -> &TestCase {
        match self {
            TestResult::Passed { case, .. } => case,
            TestResult::Failed { case, .. } => case,
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TestResult::Passed { duration, .. } => *duration,
            TestResult::Failed { duration, .. } => *duration,
        }
    }

    /// Status text for the summary table and the JSON report.
    /// 用于摘要表和 JSON 报告的状态文本。
    pub fn status_str(&self) -> &'static str {
        match self {
            TestResult::Passed { .. } => "PASSED",
            TestResult::Failed { .. } => "FAILED",
        }
    }
}
