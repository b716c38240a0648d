//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints run progress and results to the console: the per-test
//! label and PASSED/FAILED line as each case completes, a formatted summary
//! table, and the final aggregate banner.
//!
//! 此模块将运行进度和结果打印到控制台：每个用例完成时的标签和
//! PASSED/FAILED 行、格式化的摘要表以及最终的汇总横幅。

use crate::core::models::{TestCase, TestResult};
use colored::*;

/// Prints the label of the case about to run, e.g.
/// `Test1: echo hello > out.txt`.
/// 打印即将运行的用例标签。
pub fn print_case_header(case: &TestCase) {
    println!("{}", case.label());
}

/// Prints the indented per-test verdict line.
/// 打印缩进的单测试结论行。
pub fn print_case_result(result: &TestResult) {
    match result {
        TestResult::Passed { .. } => println!("  {}", "PASSED".green()),
        TestResult::Failed { .. } => println!("  {}", "**FAILED**".red()),
    }
}

/// Prints a formatted summary of all results.
///
/// 打印所有结果的格式化摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - PASSED | Test1: echo hello > out.txt              |      0.01s
///   - FAILED | Test2: sort-tool a.bed > sorted.bed      |      0.35s
/// ```
pub fn print_summary(results: &[TestResult]) {
    println!("\n{}", "--- Test Summary ---".bold());

    for result in results {
        let status_colored = match result {
            TestResult::Passed { .. } => result.status_str().green(),
            TestResult::Failed { .. } => result.status_str().red(),
        };
        let duration_str = format!("{:.2?}", result.duration());

        println!(
            "  - {} | {:<40} | {:>10}",
            status_colored,
            result.case().label(),
            duration_str
        );
    }
}

/// Prints the aggregate banner: the logical AND of all per-test outcomes.
/// 打印汇总横幅：所有单测试结果的逻辑与。
pub fn print_aggregate(all_passed: bool) {
    if all_passed {
        println!("\n\n{}\n\n", "-- PASSED OVERALL! --".green().bold());
    } else {
        println!("\n\n{}\n\n", "-- FAILURE(S) DETECTED! --".red().bold());
    }
}
