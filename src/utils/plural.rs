//! Pluralization helpers for log messages.

/// `"s"` when the count is not one.
#[inline]
pub fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// `"3 files"` / `"1 file"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
