/*
 * key.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Canonical component keys.
//!
//! A component declared as `@name="app-button"` is used as `<AppButton>`.
//! Declared names go through [`component_key`], so declarations may use any
//! spelling (`app-button`, `app_button`, `appButton`, `App Button`) and still
//! land on the same key. Usages are matched against the key as written.

/// Normalize a component name into its PascalCase lookup key.
///
/// The name is split into runs at every character that is not an ASCII
/// letter or digit. A name made of several runs has each run capitalized
/// (first letter upper, rest lower) and joined: `foo-bar` and `__FOO_BAR__`
/// both become `FooBar`. A name that is a single run keeps its casing apart
/// from the first letter, so `fooBar` becomes `FooBar` and `HTMLParser`
/// stays `HTMLParser`.
///
/// The function is idempotent.
///
/// # Example
///
/// ```rust
/// use creamy::component_key;
///
/// assert_eq!(component_key("app-button"), "AppButton");
/// assert_eq!(component_key("__FOO_BAR__"), "FooBar");
/// assert_eq!(component_key("HTMLParser"), "HTMLParser");
/// assert_eq!(component_key(&component_key("fooBar")), "FooBar");
/// ```
pub fn component_key(name: &str) -> String {
    let runs: Vec<&str> = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .collect();

    let mut key = String::with_capacity(name.len());
    match runs.as_slice() {
        [] => {}
        [single] => push_with_first_upper(&mut key, single),
        words => {
            for word in words {
                push_capitalized(&mut key, word);
            }
        }
    }
    key
}

/// Append `word` with its first letter uppercased and the rest untouched.
fn push_with_first_upper(key: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        key.push(first.to_ascii_uppercase());
        key.push_str(chars.as_str());
    }
}

/// Append `word` with its first letter uppercased and the rest lowercased.
fn push_capitalized(key: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        key.push(first.to_ascii_uppercase());
        key.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}
