//! # Gruvbox Palette
//!
//! The static data behind the gruvbox stylesheets: the base [`Palette`],
//! the authored light [`ModeTable`], and the [`Polarity`] table used to
//! derive the dark mode from it.
//!
//! ```rust
//! use gruvbox_palette::{Inversion, ModeTable, GRUVBOX};
//!
//! let light = ModeTable::gruvbox_light();
//! let dark = light.invert(&GRUVBOX, Inversion::default()).unwrap();
//!
//! assert_eq!(light.token_for("bg0"), Some("light0"));
//! assert_eq!(dark.token_for("bg0"), Some("dark0"));
//! assert_eq!(GRUVBOX.get("dark0").unwrap().hex, "#282828");
//! ```

mod error;
mod mode;
mod palette;
mod polarity;

pub use error::{PaletteError, Result};
pub use mode::{Appearance, ModeEntry, ModeTable, LIGHT_MODE};
pub use palette::{Palette, Swatch, GRUVBOX};
pub use polarity::{Inversion, Polarity};
