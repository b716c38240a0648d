//! # Text Normalization Module / 文本规范化模块
//!
//! This module implements the canonical text transform applied to fixture
//! contents and expected answers before they are written or compared.
//! Both sides of the eventual output comparison go through the same rule,
//! which is what makes a byte-for-byte equality check meaningful.
//!
//! 此模块实现了在写入或比较之前应用于输入文件内容和预期答案的规范文本转换。
//! 输出比较的双方都经过同一规则处理，这使得逐字节的相等检查有意义。

/// Canonicalizes a block of text for comparison.
///
/// Every space character is removed (anywhere in the string, not only at the
/// edges), the remainder is split on newlines, empty lines are dropped, and
/// each surviving line is newline-terminated. When a non-empty `tag` is
/// given, it is prefixed to every line with a tab separator.
///
/// 规范化一段用于比较的文本。
/// 删除所有空格字符（字符串中任何位置，而不仅是两端），按换行符拆分，
/// 丢弃空行，并为每个保留的行追加换行符。
/// 当给定非空 `tag` 时，它会以制表符作为分隔符添加到每行的前面。
///
/// # Arguments
/// * `text` - The raw text to canonicalize
/// * `tag` - Optional line tag (the plan's `chromosome` attribute)
///
/// # Examples
/// ```
/// use regression_runner::core::normalize::normalize;
///
/// assert_eq!(normalize("a b\nc  d\n", Some("chr1")), "chr1\tab\nchr1\tcd\n");
/// assert_eq!(normalize("", None), "");
/// ```
pub fn normalize(text: &str, tag: Option<&str>) -> String {
    let stripped: String = text.chars().filter(|c| *c != ' ').collect();

    let mut canonical = String::with_capacity(stripped.len());
    for line in stripped.split('\n') {
        if line.is_empty() {
            continue;
        }
        if let Some(tag) = tag.filter(|t| !t.is_empty()) {
            canonical.push_str(tag);
            canonical.push('\t');
        }
        canonical.push_str(line);
        canonical.push('\n');
    }
    canonical
}
