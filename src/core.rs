//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner,
//! including the data model, plan loading, normalization, and the
//! test execution engine.
//!
//! 此模块包含运行器的核心功能，
//! 包括数据模型、计划加载、规范化和测试执行引擎。

pub mod error;
pub mod execution;
pub mod models;
pub mod normalize;
pub mod plan;

// Re-exports
pub use error::{ExecutionError, PlanError};
pub use execution::run_test_case;
pub use models::{TestCase, TestResult};
pub use plan::load_plan;
