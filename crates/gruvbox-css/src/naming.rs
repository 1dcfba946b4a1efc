//! Identifier derivation.
//!
//! Internal names (`dark0_hard`, `fg4_256`) become custom-property suffixes
//! with [`css_identifier`] (`dark0-hard`), and custom-property suffixes
//! become export names with [`constant_name`] (`DARK0_HARD`).

/// Converts an internal name to a lowercase, hyphenated CSS identifier.
///
/// Runs of `_`, `-` and whitespace collapse to a single `-`, a lowercase or
/// digit followed by an uppercase letter gets a `-` between them, and
/// leading/trailing separators are dropped. Applying it to its own output
/// is a no-op.
///
/// ```rust
/// use gruvbox_css::naming::css_identifier;
///
/// assert_eq!(css_identifier("dark0_hard"), "dark0-hard");
/// assert_eq!(css_identifier("fgMuted"), "fg-muted");
/// assert_eq!(css_identifier("dark0-hard"), "dark0-hard");
/// ```
pub fn css_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            pending_separator = true;
            prev = Some(c);
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            pending_separator = true;
        }
        if pending_separator && !out.is_empty() {
            out.push('-');
        }
        pending_separator = false;
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// Converts a hyphenated suffix to an upper snake case constant name.
///
/// Characters that cannot appear in a JS identifier become `_`, and a name
/// that would start with a digit is prefixed with `_`.
///
/// ```rust
/// use gruvbox_css::naming::constant_name;
///
/// assert_eq!(constant_name("abs-dark0-hard"), "ABS_DARK0_HARD");
/// assert_eq!(constant_name("mode-bg0"), "MODE_BG0");
/// ```
pub fn constant_name(suffix: &str) -> String {
    let mut out = suffix
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_");

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
