//! Turning palette and mode tables into [`CssMap`]s.
//!
//! Two layers of custom properties are generated:
//!
//! - absolute variables, `--<ns>-abs-<token>: #rrggbb;`, always under
//!   `:root` and never redefined;
//! - mode variables, `--<ns>-mode-<role>: var(--<ns>-abs-<token>);`, placed
//!   under whatever selector activates that mode.
//!
//! Switching modes only redefines the mode variables; hex values live in
//! exactly one place.

use gruvbox_palette::{ModeTable, Palette};
use tracing::debug;

use crate::css_map::{CssMap, ROOT};
use crate::naming::css_identifier;

/// The custom-property namespace, e.g. `gruvbox` for `--gruvbox-*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `--<ns>`, without the trailing separator.
    pub fn prefix(&self) -> String {
        format!("--{}", self.name)
    }

    /// Property name of the absolute variable for `token`.
    pub fn absolute(&self, token: &str) -> String {
        format!("--{}-abs-{}", self.name, css_identifier(token))
    }

    /// Property name of the mode variable for `role`.
    pub fn mode(&self, role: &str) -> String {
        format!("--{}-mode-{}", self.name, css_identifier(role))
    }

    /// `var()` reference to the absolute variable for `token`.
    pub fn reference(&self, token: &str) -> String {
        format!("var({})", self.absolute(token))
    }

    /// Strips `--<ns>-` from a property name.
    ///
    /// ```rust
    /// use gruvbox_css::Namespace;
    ///
    /// let ns = Namespace::new("gruvbox");
    /// assert_eq!(ns.strip("--gruvbox-abs-dark0"), Some("abs-dark0"));
    /// assert_eq!(ns.strip("--other-abs-dark0"), None);
    /// ```
    pub fn strip<'a>(&self, property: &'a str) -> Option<&'a str> {
        property
            .strip_prefix("--")?
            .strip_prefix(self.name.as_str())?
            .strip_prefix('-')
    }
}

/// Absolute variables for every swatch, under `:root`.
pub fn palette_css_map(palette: &Palette, namespace: &Namespace) -> CssMap {
    let mut map = CssMap::new();
    for swatch in palette {
        map.push(ROOT, namespace.absolute(swatch.name), swatch.hex);
    }
    debug!(swatches = palette.len(), "assembled palette variables");
    map
}

/// Mode variables for every entry of `table`, under `selector`.
pub fn mode_css_map(table: &ModeTable, namespace: &Namespace, selector: &str) -> CssMap {
    let mut map = CssMap::new();
    for entry in table {
        map.push(
            selector,
            namespace.mode(&entry.role),
            namespace.reference(&entry.token),
        );
    }
    debug!(
        mode = table.appearance().name(),
        selector,
        roles = table.len(),
        "assembled mode variables"
    );
    map
}
