/*
 * placeholder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-pass placeholder scanner for component bodies.
//!
//! Recognized tokens:
//! - `{children}`: the inner markup of the usage element
//! - `{name}`: attribute `name` of the usage element, escaped
//! - `{name!}`: attribute `name` of the usage element, inserted raw
//!
//! Names are ASCII letters, digits, `_`, `-`, `.` and `:`. Any other brace
//! text (CSS blocks, inline scripts, `{}`) is copied through untouched.

/// A placeholder found in a component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// `{children}` (or `{children!}`).
    Children,

    /// `{name}` or, with `raw` set, `{name!}`.
    Attribute { name: &'a str, raw: bool },
}

/// Replace every placeholder in `source` with what `resolve` returns for it.
pub fn interpolate<'s, F>(source: &'s str, mut resolve: F) -> String
where
    F: FnMut(Placeholder<'s>) -> String,
{
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match parse_token(after) {
            Some((placeholder, consumed)) => {
                out.push_str(&resolve(placeholder));
                rest = &after[consumed..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse the text following a `{`. Returns the token and the bytes consumed,
/// closing brace included.
fn parse_token(text: &str) -> Option<(Placeholder<'_>, usize)> {
    let len = text.bytes().take_while(|&b| is_name_byte(b)).count();
    if len == 0 {
        return None;
    }

    let name = &text[..len];
    let tail = &text[len..];
    let (raw, consumed) = if tail.starts_with("!}") {
        (true, len + 2)
    } else if tail.starts_with('}') {
        (false, len + 1)
    } else {
        return None;
    };

    let placeholder = if name == "children" {
        Placeholder::Children
    } else {
        Placeholder::Attribute { name, raw }
    };
    Some((placeholder, consumed))
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b':')
}
