use regex::Regex;
use std::sync::LazyLock;

/// CJK Unified Ideographs, Extension A and the supplementary-plane extensions B-E.
pub const HAN_PATTERN: &str = r"[\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{20000}-\x{2A6DF}\x{2A700}-\x{2B73F}\x{2B740}-\x{2B81F}\x{2B820}-\x{2CEAF}]";

static HAN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(HAN_PATTERN).unwrap());

/// True when `s` contains at least one Han ideograph.
pub fn is_chinese_script(s: &str) -> bool {
    HAN_REGEX.is_match(s)
}
