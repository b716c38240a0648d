//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of run results: colored per-test
//! and aggregate output on the console, and an optional machine-readable
//! JSON report for CI consumption.
//!
//! 此模块处理运行结果的呈现：控制台上带颜色的单测试和汇总输出，
//! 以及供 CI 使用的可选机器可读 JSON 报告。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_aggregate, print_case_header, print_case_result, print_summary};
pub use json::write_json_report;
