// src/core/sanitize.rs

/// Drop embedded line breaks, turn no-break spaces into plain spaces, trim the
/// ends. Inner runs of spaces are kept.
pub fn clean_text(s: &str) -> String {
    s.replace(['\r', '\n'], "")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}
