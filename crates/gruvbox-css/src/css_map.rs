//! Ordered selector → declarations maps and their merge.
//!
//! A [`CssMap`] keeps selectors in first-insertion order, and each selector's
//! [`Declarations`] keep properties in first-insertion order. That order is
//! what ends up in the generated files, so two runs over the same tables
//! always print the same bytes.
//!
//! Merging is a union: a selector present in both maps gets the properties
//! of both, earlier ones first. A property defined twice keeps its original
//! position and takes the later value.
//!
//! ```rust
//! use gruvbox_css::{CssMap, ROOT};
//!
//! let mut palette = CssMap::new();
//! palette.push(ROOT, "--gruvbox-abs-light0", "#fbf1c7");
//!
//! let mut light = CssMap::new();
//! light.push(ROOT, "--gruvbox-mode-bg0", "var(--gruvbox-abs-light0)");
//!
//! let merged = CssMap::merge_all([&palette, &light]);
//! assert_eq!(merged.get(ROOT).unwrap().len(), 2);
//! ```

use tracing::warn;

/// The document root selector.
pub const ROOT: &str = ":root";

/// Property → value pairs under one selector, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value if there was one.
    ///
    /// A property that already exists keeps its position.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for (property, value) in iter {
            declarations.insert(property, value);
        }
        declarations
    }
}

/// Selector → declarations, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssMap {
    rules: Vec<(String, Declarations)>,
}

impl CssMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one declaration under `selector`, creating the selector if needed.
    pub fn push(
        &mut self,
        selector: &str,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.entry(selector).insert(property, value)
    }

    fn entry(&mut self, selector: &str) -> &mut Declarations {
        let index = match self.rules.iter().position(|(s, _)| s == selector) {
            Some(index) => index,
            None => {
                self.rules.push((selector.to_string(), Declarations::new()));
                self.rules.len() - 1
            }
        };
        &mut self.rules[index].1
    }

    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, d)| d)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(s, d)| (s.as_str(), d))
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Unions `other` into this map.
    pub fn merge_from(&mut self, other: &CssMap) {
        for (selector, declarations) in other.iter() {
            let target = self.entry(selector);
            for (property, value) in declarations.iter() {
                if let Some(previous) = target.insert(property, value) {
                    if previous != value {
                        warn!(
                            selector,
                            property,
                            previous = %previous,
                            value,
                            "property redefined during merge"
                        );
                    }
                }
            }
        }
    }

    /// Merges maps left to right into a new map.
    pub fn merge_all<'a>(maps: impl IntoIterator<Item = &'a CssMap>) -> CssMap {
        let mut merged = CssMap::new();
        for map in maps {
            merged.merge_from(map);
        }
        merged
    }
}
