//! # Normalize Module Unit Tests / Normalize 模块单元测试
//!
//! This module contains unit tests for the canonical text transform applied
//! to fixture contents and expected answers.
//!
//! 此模块包含应用于输入文件内容和预期答案的规范文本转换的单元测试。

use regression_runner::core::normalize::normalize;

#[cfg(test)]
mod untagged_tests {
    use super::*;

    #[test]
    fn test_removes_every_space_character() {
        assert_eq!(normalize("a b c", None), "abc\n");
        assert_eq!(normalize("  leading and  internal ", None), "leadingandinternal\n");
    }

    #[test]
    fn test_drops_empty_lines() {
        assert_eq!(normalize("one\n\n\ntwo\n", None), "one\ntwo\n");
        // A line of only spaces becomes empty and is dropped as well.
        assert_eq!(normalize("one\n   \ntwo", None), "one\ntwo\n");
    }

    #[test]
    fn test_terminates_every_line_with_newline() {
        // Input without a trailing newline still canonicalizes to one.
        assert_eq!(normalize("last", None), "last\n");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize("", None), "");
        assert_eq!(normalize("   \n \n ", None), "");
    }

    #[test]
    fn test_tabs_are_preserved() {
        assert_eq!(normalize("10\t20\t30", None), "10\t20\t30\n");
    }

    #[test]
    fn test_idempotence() {
        let inputs = ["a b\nc  d\n", "", "x\n\ny z", "10 20\t30\n"];
        for input in inputs {
            let once = normalize(input, None);
            assert_eq!(normalize(&once, None), once, "input: {:?}", input);
        }
    }
}

#[cfg(test)]
mod tagged_tests {
    use super::*;

    #[test]
    fn test_tag_prefixes_each_line_with_tab_separator() {
        assert_eq!(normalize("a b\nc  d\n", Some("chr1")), "chr1\tab\nchr1\tcd\n");
    }

    #[test]
    fn test_empty_tag_behaves_like_no_tag() {
        assert_eq!(normalize("a b\nc d", Some("")), "ab\ncd\n");
        assert_eq!(normalize("", Some("")), "");
    }

    #[test]
    fn test_tag_is_not_applied_to_dropped_lines() {
        // Empty lines vanish entirely; they never receive a tag.
        assert_eq!(normalize("x\n\ny", Some("chr2")), "chr2\tx\nchr2\ty\n");
    }
}
