/*
 * sanitize.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML escaping for interpolated attribute values.

/// Escape `&`, `<`, `>`, `"`, `'` and `/` as HTML character references.
///
/// Escaping is not idempotent: an already escaped string has its ampersands
/// escaped again.
///
/// # Example
///
/// ```rust
/// use creamy::sanitize;
///
/// assert_eq!(sanitize("<script>"), "&lt;script&gt;");
/// ```
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            c => out.push(c),
        }
    }
    out
}
