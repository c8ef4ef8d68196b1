//! Go source rendering for the sorted author list.
//!
//! The output shape is consumed verbatim by the application build, so every
//! byte here (indentation, separators, trailing comma) is significant.

use crate::history::DELIMITER;

/// Package clause used when none is configured.
pub const DEFAULT_PACKAGE: &str = "gui";

/// Separator between rendered literals: comma, newline, 8-space indent.
const ITEM_SEPARATOR: &str = ",\n        ";

/// Format one author as a Go string literal.
///
/// `"Name  -  email"` when the email is non-empty, `"Name"` otherwise.
pub fn format_entry(name: &str, email: &str) -> String {
    if email.is_empty() {
        format!("\"{}\"", escape_go(name))
    } else {
        format!("\"{}{}{}\"", escape_go(name), DELIMITER, escape_go(email))
    }
}

/// Render the complete generated file for `package`.
pub fn render_source(package: &str, authors: &[(String, String)]) -> String {
    let items = authors
        .iter()
        .map(|(name, email)| format_entry(name, email))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    format!(
        "package {package}\n\
         \n\
         func authors() []string {{\n    \
         return []string{{\n        \
         {items},\n\n    \
         }}\n\
         }}\n"
    )
}

/// Escape characters that would end or corrupt a Go interpreted string.
fn escape_go(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(ch),
        }
    }
    out
}
