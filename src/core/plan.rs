//! # Test Plan Loader Module / 测试计划加载模块
//!
//! This module turns a parsed plan document into an ordered list of
//! `TestCase` values. Loading has a deliberate side effect: every INPUT
//! fixture is normalized and written to disk here, before any external
//! process is spawned.
//!
//! 此模块将解析后的计划文档转换为有序的 `TestCase` 列表。
//! 加载有一个刻意的副作用：每个 INPUT 输入文件在此处被规范化并写入磁盘，
//! 发生在任何外部进程启动之前。

use crate::core::error::PlanError;
use crate::core::models::{TestCase, TestCaseBuilder};
use crate::core::normalize::normalize;
use crate::infra::fs::write_text;
use std::path::PathBuf;

/// The child element kinds recognized inside a TEST element. Anything else
/// is ignored.
/// TEST 元素内识别的子元素种类。其他任何元素都被忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Call,
    Input,
    Output,
    Answer,
}

impl ChildKind {
    fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "CALL" => Some(ChildKind::Call),
            "INPUT" => Some(ChildKind::Input),
            "OUTPUT" => Some(ChildKind::Output),
            "ANSWER" => Some(ChildKind::Answer),
            _ => None,
        }
    }
}

/// Loads every test element from the plan document and returns the cases
/// sorted ascending by `order`. Ties are not expected; the sort is stable,
/// so any would keep document order.
///
/// 从计划文档加载每个测试元素，并返回按 `order` 升序排序的用例。
/// 不期望出现相同的 `order`；排序是稳定的，因此如有相同值将保持文档顺序。
///
/// # Errors
/// `PlanError::Empty` when the document contains no test elements, plus any
/// per-test error from `load_test`.
pub fn load_plan(doc: &roxmltree::Document) -> Result<Vec<TestCase>, PlanError> {
    let mut cases = Vec::new();
    for element in doc.root_element().children().filter(|n| n.is_element()) {
        cases.push(load_test(element)?);
    }

    if cases.is_empty() {
        return Err(PlanError::Empty);
    }

    cases.sort_by_key(|case| case.order);
    Ok(cases)
}

/// Builds one `TestCase` from a TEST element, writing its fixture files as
/// they are encountered.
/// 从一个 TEST 元素构建一个 `TestCase`，在遇到输入文件时写入它们。
fn load_test(element: roxmltree::Node<'_, '_>) -> Result<TestCase, PlanError> {
    let order_raw = element.attribute("order").unwrap_or_default();
    let order: i32 = order_raw.parse().map_err(|_| PlanError::InvalidOrder {
        value: order_raw.to_string(),
    })?;
    let tag = element.attribute("chromosome").map(str::to_string);

    let mut builder = TestCaseBuilder::new(order, tag);

    for child in element.children().filter(|n| n.is_element()) {
        let Some(kind) = ChildKind::from_tag_name(child.tag_name().name()) else {
            continue;
        };

        match kind {
            ChildKind::Call => {
                if let Some(text) = child.text() {
                    builder.push_call(text.trim());
                }
            }
            ChildKind::Output => {
                let name = required_name(child, "OUTPUT", order)?;
                builder.set_output(PathBuf::from(name));
            }
            ChildKind::Input => {
                let name = required_name(child, "INPUT", order)?;
                let path = PathBuf::from(name);
                let content = normalize(child.text().unwrap_or_default().trim(), builder.tag());
                write_text(&path, &content).map_err(|source| PlanError::FixtureWrite {
                    path: path.clone(),
                    source,
                })?;
                builder.add_fixture(path);
            }
            ChildKind::Answer => {
                // An ANSWER without text content means an empty expected answer.
                // 没有文本内容的 ANSWER 意味着预期答案为空。
                let answer = normalize(child.text().unwrap_or_default().trim(), builder.tag());
                builder.set_answer(answer)?;
            }
        }
    }

    builder.finish()
}

fn required_name<'a>(
    child: roxmltree::Node<'a, '_>,
    element: &'static str,
    order: i32,
) -> Result<&'a str, PlanError> {
    match child.attribute("name") {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(PlanError::MissingName { element, order }),
    }
}
