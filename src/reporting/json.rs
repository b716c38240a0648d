//! # JSON Reporting Module / JSON 报告模块
//!
//! This module writes a machine-readable summary of one run, for CI
//! pipelines that want to consume results without scraping console output.
//!
//! 此模块写入单次运行的机器可读摘要，供希望在不抓取控制台输出的情况下
//! 消费结果的 CI 流水线使用。

use crate::core::models::TestResult;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One case entry in the report.
/// 报告中的单个用例条目。
#[derive(Debug, Serialize)]
struct CaseReport<'a> {
    order: i32,
    invocation: &'a str,
    output_path: &'a Path,
    status: &'static str,
    duration: Duration,
}

/// The complete run report.
/// 完整的运行报告。
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated_at: DateTime<Utc>,
    plan: &'a Path,
    total: usize,
    passed: usize,
    failed: usize,
    cases: Vec<CaseReport<'a>>,
}

/// Serializes the run's results to pretty-printed JSON at `report_path`.
///
/// 将运行结果序列化为格式化的 JSON 并写入 `report_path`。
///
/// # Arguments
/// * `results` - The per-case outcomes, in execution order
/// * `plan_path` - The plan file the run was driven by
/// * `report_path` - Destination of the JSON document
pub fn write_json_report(results: &[TestResult], plan_path: &Path, report_path: &Path) -> Result<()> {
    let failed = results.iter().filter(|r| r.is_failure()).count();

    let report = RunReport {
        generated_at: Utc::now(),
        plan: plan_path,
        total: results.len(),
        passed: results.len() - failed,
        failed,
        cases: results
            .iter()
            .map(|result| CaseReport {
                order: result.case().order,
                invocation: &result.case().invocation,
                output_path: &result.case().output_path,
                status: result.status_str(),
                duration: result.duration(),
            })
            .collect(),
    };

    let body = serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
    fs::write(report_path, body)
        .with_context(|| format!("Failed to write run report to '{}'", report_path.display()))?;
    Ok(())
}
