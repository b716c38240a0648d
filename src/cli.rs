//! # Command-Line Interface Module / 命令行接口模块
//!
//! This module builds the clap command tree and dispatches to the
//! subcommand implementations.
//!
//! 此模块构建 clap 命令树并分派到子命令的实现。

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub mod commands;

fn build_cli() -> Command {
    Command::new("regression-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("A declarative regression-test runner for external command-line tools")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Load a test plan and run every test in order")
                .arg(
                    Arg::new("plan")
                        .help("Path to the XML test plan")
                        .value_name("PLAN")
                        .default_value("TestPlan.xml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Write a machine-readable JSON run report to this path")
                        .value_name("JSON")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about("Create a commented starter test plan")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Where to write the starter plan")
                        .value_name("OUTPUT")
                        .default_value("TestPlan.xml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Overwrite an existing plan file")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses the command line and runs the selected subcommand.
/// 解析命令行并运行所选的子命令。
pub async fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let plan = run_matches
                .get_one::<PathBuf>("plan")
                .unwrap() // Has default
                .clone();
            let json = run_matches.get_one::<PathBuf>("json").cloned();

            commands::run::execute(plan, json).await
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .unwrap() // Has default
                .clone();
            let force = init_matches.get_flag("force");

            commands::init::execute(output, force)
        }
        _ => unreachable!("subcommand is required"),
    }
}
