//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: the sequential driver that
//! loads the plan, executes every test case in ascending order, and reports
//! per-test plus aggregate status.
//!
//! 此模块实现 `run` 命令：顺序驱动器，它加载计划、按升序执行每个
//! 测试用例，并报告单测试和汇总状态。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf};

use crate::{
    core::{execution::run_test_case, plan::load_plan},
    reporting::{
        console::{print_aggregate, print_case_header, print_case_result, print_summary},
        json::write_json_report,
    },
};

/// Executes the run command.
///
/// Execution is strictly sequential: each case is awaited to completion
/// before the next starts, which is what makes the plan's working-directory
/// file names safe to reuse. A `PlanError` or `ExecutionError` aborts the
/// whole run; a comparison mismatch only marks its case as failed.
///
/// 执行 run 命令。
///
/// 执行是严格顺序的：每个用例在下一个开始之前等待完成，
/// 这使得计划中工作目录文件名的复用是安全的。`PlanError` 或
/// `ExecutionError` 会中止整个运行；比较不匹配只会将其用例标记为失败。
///
/// # Arguments
/// * `plan` - Path to the XML test plan
/// * `json` - Optional path for the machine-readable run report
pub async fn execute(plan: PathBuf, json: Option<PathBuf>) -> Result<()> {
    let plan_text = fs::read_to_string(&plan)
        .with_context(|| format!("Failed to read test plan '{}'", plan.display()))?;

    // The document parser is an external collaborator; its errors surface
    // with the plan path attached rather than as a PlanError.
    // 文档解析器是外部协作者；其错误附带计划路径呈现，
    // 而不是作为 PlanError。
    let doc = roxmltree::Document::parse(&plan_text)
        .with_context(|| format!("Failed to parse test plan '{}'", plan.display()))?;

    let cases = load_plan(&doc)
        .with_context(|| format!("Invalid test plan '{}'", plan.display()))?;

    println!(
        "Loaded {} test(s) from {}\n",
        cases.len().to_string().yellow(),
        plan.display()
    );

    let mut results = Vec::with_capacity(cases.len());
    let mut all_passed = true;

    for case in cases {
        print_case_header(&case);
        let result = run_test_case(case).await?;
        print_case_result(&result);
        all_passed &= !result.is_failure();
        results.push(result);
    }

    print_summary(&results);
    print_aggregate(all_passed);

    if let Some(report_path) = &json {
        println!("Generating JSON report at: {}", report_path.display());
        if let Err(e) = write_json_report(&results, &plan, report_path) {
            eprintln!("{} {}", "Failed to generate JSON report:".red(), e);
        }
    }

    if all_passed {
        Ok(())
    } else {
        anyhow::bail!("Regression tests failed.")
    }
}
