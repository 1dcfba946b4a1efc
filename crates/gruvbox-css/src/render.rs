//! CSS text output.
//!
//! [`to_css_string`] produces raw, single-line-per-declaration CSS from a
//! [`CssMap`]. That text is then passed through [`format`] or [`minify`]
//! before it is written anywhere, both of which parse it first, so a
//! malformed document never reaches disk.

use crate::css_map::CssMap;
use crate::error::CssError;
use crate::parser::parse_stylesheet;

pub(crate) const EOL: &str = "\n";

/// The media condition that activates the dark mode in the pcs variant.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Serializes a map as `selector { p: v;\np: v; }` blocks.
///
/// ```rust
/// use gruvbox_css::{to_css_string, CssMap, ROOT};
///
/// let mut map = CssMap::new();
/// map.push(ROOT, "--a", "1");
/// map.push(ROOT, "--b", "2");
/// assert_eq!(to_css_string(&map), ":root { --a: 1;\n--b: 2; }");
/// ```
pub fn to_css_string(map: &CssMap) -> String {
    map.iter()
        .map(|(selector, declarations)| {
            let body = declarations
                .iter()
                .map(|(property, value)| format!("{}: {};", property, value))
                .collect::<Vec<_>>()
                .join(EOL);
            format!("{} {{ {} }}", selector, body)
        })
        .collect::<Vec<_>>()
        .join(EOL)
}

/// Wraps a map in an `@media` block.
pub fn media_block(condition: &str, map: &CssMap) -> String {
    format!("@media {} {{ {}}}", condition, to_css_string(map))
}

/// Pretty-prints CSS text.
pub fn format(css: &str) -> Result<String, CssError> {
    Ok(parse_stylesheet(css)?.to_pretty())
}

/// Minifies CSS text.
pub fn minify(css: &str) -> Result<String, CssError> {
    Ok(parse_stylesheet(css)?.to_minified())
}
