//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a commented
//! starter test plan to get a new tool harness going.
//!
//! 此模块实现 `init` 命令，它写入一个带注释的入门测试计划，
//! 以便快速搭建新的工具测试环境。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf};

const DEFAULT_PLAN: &str = r#"<?xml version="1.0"?>
<!-- Regression test plan / 回归测试计划

     Each TEST runs one external-tool invocation and compares its normalized
     output against the stored ANSWER. Attributes:
       order      - required integer; tests run in ascending order
       chromosome - optional tag prefixed to every fixture/answer line
     Children (any order):
       CALL   - command-line fragment(s), concatenated
       INPUT  - fixture file (name attribute); written before the run,
                appended to the command line as a trailing argument
       OUTPUT - required destination file for the captured output
       ANSWER - expected output (exactly one; may be empty)
-->
<REGRESSION>
  <TEST order="1">
    <CALL>echo hello</CALL>
    <OUTPUT name="test1.out"/>
    <ANSWER>
      hello
    </ANSWER>
  </TEST>
  <TEST order="2" chromosome="chr1">
    <CALL>cat</CALL>
    <INPUT name="test2.in">
      10 20 alpha
      30 40 beta
    </INPUT>
    <OUTPUT name="test2.out"/>
    <ANSWER>
      10 20 alpha
      30 40 beta
    </ANSWER>
  </TEST>
</REGRESSION>
"#;

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new plan file
/// * `force` - Whether to overwrite an existing file
pub fn execute(output: PathBuf, force: bool) -> Result<()> {
    // Check if the file already exists
    if output.exists() && !force {
        println!(
            "{}",
            format!("'{}' already exists.", output.display()).red()
        );
        println!("{}", "Use --force to overwrite it.".yellow());
        return Ok(());
    }

    // Create parent directories if needed
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory '{}'", parent.display())
            })?;
        }
    }

    fs::write(&output, DEFAULT_PLAN)
        .with_context(|| format!("Failed to write starter plan to '{}'", output.display()))?;

    println!(
        "{}",
        format!("Created starter test plan at '{}'.", output.display()).green()
    );
    println!("Run it with: regression-runner run {}", output.display());
    Ok(())
}
