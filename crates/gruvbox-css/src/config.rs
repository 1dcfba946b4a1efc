//! Build configuration.
//!
//! Defaults reproduce the published gruvbox-css file set, including its
//! dark-mode accents ([`Inversion::Classic`]). Every field can be overridden
//! with a `with_*` setter.
//!
//! ```rust
//! use gruvbox_css::BuildConfig;
//! use gruvbox_palette::Inversion;
//!
//! let config = BuildConfig::default()
//!     .with_file_stem("theme")
//!     .with_inversion(Inversion::Symmetric);
//! assert_eq!(config.dark_class(), ".gruvbox-dark");
//! assert_eq!(config.file_stem(), "theme");
//! ```

use gruvbox_palette::{Appearance, Inversion};

use crate::assemble::Namespace;
use crate::css_map::ROOT;
use crate::naming::{constant_name, css_identifier};

pub const DEFAULT_NAMESPACE: &str = "gruvbox";
pub const DEFAULT_DARK_CLASS: &str = ".gruvbox-dark";
pub const DEFAULT_FILE_STEM: &str = "gruvbox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    namespace: String,
    dark_class: String,
    file_stem: String,
    inversion: Inversion,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            inversion: Inversion::default(),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the custom-property namespace (`--<namespace>-*`).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the selector that activates dark mode in the class variant.
    pub fn with_dark_class(mut self, selector: impl Into<String>) -> Self {
        self.dark_class = selector.into();
        self
    }

    /// Sets the base name of every artifact.
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn with_inversion(mut self, inversion: Inversion) -> Self {
        self.inversion = inversion;
        self
    }

    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.namespace.clone())
    }

    pub fn dark_class(&self) -> &str {
        &self.dark_class
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    pub fn inversion(&self) -> Inversion {
        self.inversion
    }

    /// The selector a mode's variables live under in the class variant.
    pub fn selector_for(&self, appearance: Appearance) -> &str {
        match appearance {
            Appearance::Light => ROOT,
            Appearance::Dark => &self.dark_class,
        }
    }

    /// Name of the global object in the minified script (`GRUVBOX`).
    pub fn global_name(&self) -> String {
        constant_name(&css_identifier(&self.namespace))
    }
}
