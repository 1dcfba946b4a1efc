//! # Gruvbox CSS
//!
//! Generates the gruvbox stylesheet and constant-module file set from the
//! tables in [`gruvbox_palette`].
//!
//! ## Two layers of variables
//!
//! Every palette color becomes an absolute variable that never changes:
//!
//! ```css
//! :root { --gruvbox-abs-light0: #fbf1c7; }
//! ```
//!
//! Every semantic role becomes a mode variable pointing at one of them, and
//! only the mode variables are redefined for dark mode:
//!
//! ```css
//! :root         { --gruvbox-mode-bg0: var(--gruvbox-abs-light0); }
//! .gruvbox-dark { --gruvbox-mode-bg0: var(--gruvbox-abs-dark0); }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use gruvbox_css::{BuildConfig, ThemeBuild, ROOT};
//!
//! let build = ThemeBuild::new(BuildConfig::default()).unwrap();
//!
//! let doc = build.class_document();
//! assert_eq!(
//!     doc.get(ROOT).unwrap().get("--gruvbox-mode-bg0"),
//!     Some("var(--gruvbox-abs-light0)")
//! );
//!
//! let artifacts = build.artifacts().unwrap();
//! assert_eq!(artifacts.len(), 8);
//! ```
//!
//! Writing them out is [`write_all`]; [`stale_artifacts`] compares against
//! an existing directory instead.
//!
//! ## Output variants
//!
//! | File | Dark mode activated by |
//! |------|------------------------|
//! | `gruvbox.css`, `gruvbox.min.css` | a `.gruvbox-dark` ancestor |
//! | `gruvbox-pcs.css`, `gruvbox-pcs.min.css` | `@media (prefers-color-scheme: dark)` |
//!
//! `gruvbox.js`, `gruvbox.cjs`, `gruvbox.d.ts` and `gruvbox.min.js` export
//! the custom-property names (`ABS_LIGHT0`, `MODE_BG0`, ...) for use from
//! scripts.

mod artifact;
mod assemble;
mod config;
mod css_map;
mod error;
mod exports;
pub mod naming;
mod parser;
mod render;
mod stylesheet;
mod theme;

pub use artifact::{stale_artifacts, write_all, Artifact};
pub use assemble::{mode_css_map, palette_css_map, Namespace};
pub use config::{BuildConfig, DEFAULT_DARK_CLASS, DEFAULT_FILE_STEM, DEFAULT_NAMESPACE};
pub use css_map::{CssMap, Declarations, ROOT};
pub use error::{BuildError, CssError};
pub use exports::Constants;
pub use parser::parse_stylesheet;
pub use render::{format, media_block, minify, to_css_string, DARK_SCHEME_QUERY};
pub use stylesheet::{MediaRule, Rule, StyleRule, Stylesheet};
pub use theme::ThemeBuild;
