//! The base color table.
//!
//! A [`Palette`] is a fixed, ordered list of [`Swatch`]es. Every swatch is a
//! token name paired with a `#rrggbb` value. Order matters: it is the order
//! in which absolute custom properties are emitted.

use std::collections::HashSet;

use crate::error::{PaletteError, Result};

/// A named hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

impl Swatch {
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// Decodes the `#rrggbb` value into its components.
    ///
    /// Returns `None` when the value is not exactly `#` followed by six hex
    /// digits.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// An ordered, immutable collection of swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    swatches: &'static [Swatch],
}

impl Palette {
    pub const fn new(swatches: &'static [Swatch]) -> Self {
        Self { swatches }
    }

    /// Looks up a swatch by token name.
    pub fn get(&self, name: &str) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Checks that names are unique and every value is a valid hex color.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for swatch in self.swatches {
            if !seen.insert(swatch.name) {
                return Err(PaletteError::DuplicateToken(swatch.name.to_string()));
            }
            if swatch.rgb().is_none() {
                return Err(PaletteError::InvalidHex {
                    token: swatch.name.to_string(),
                    value: swatch.hex.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

/// The gruvbox palette.
pub const GRUVBOX: Palette = Palette::new(GRUVBOX_SWATCHES);

const GRUVBOX_SWATCHES: &[Swatch] = &[
    Swatch::new("dark0_hard", "#1d2021"),
    Swatch::new("dark0", "#282828"),
    Swatch::new("dark0_soft", "#32302f"),
    Swatch::new("dark1", "#3c3836"),
    Swatch::new("dark2", "#504945"),
    Swatch::new("dark3", "#665c54"),
    Swatch::new("dark4", "#7c6f64"),
    Swatch::new("dark4_256", "#7c6f64"),
    Swatch::new("gray_245", "#928374"),
    Swatch::new("gray_244", "#928374"),
    Swatch::new("light0_hard", "#f9f5d7"),
    Swatch::new("light0", "#fbf1c7"),
    Swatch::new("light0_soft", "#f2e5bc"),
    Swatch::new("light1", "#ebdbb2"),
    Swatch::new("light2", "#d5c4a1"),
    Swatch::new("light3", "#bdae93"),
    Swatch::new("light4", "#a89984"),
    Swatch::new("light4_256", "#a89984"),
    Swatch::new("bright_red", "#fb4934"),
    Swatch::new("bright_green", "#b8bb26"),
    Swatch::new("bright_yellow", "#fabd2f"),
    Swatch::new("bright_blue", "#83a598"),
    Swatch::new("bright_purple", "#d3869b"),
    Swatch::new("bright_aqua", "#8ec07c"),
    Swatch::new("bright_orange", "#fe8019"),
    Swatch::new("neutral_red", "#cc241d"),
    Swatch::new("neutral_green", "#98971a"),
    Swatch::new("neutral_yellow", "#d79921"),
    Swatch::new("neutral_blue", "#458588"),
    Swatch::new("neutral_purple", "#b16286"),
    Swatch::new("neutral_aqua", "#689d6a"),
    Swatch::new("neutral_orange", "#d65d0e"),
    Swatch::new("faded_red", "#9d0006"),
    Swatch::new("faded_green", "#79740e"),
    Swatch::new("faded_yellow", "#b57614"),
    Swatch::new("faded_blue", "#076678"),
    Swatch::new("faded_purple", "#8f3f71"),
    Swatch::new("faded_aqua", "#427b58"),
    Swatch::new("faded_orange", "#af3a03"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gruvbox_is_valid() {
        assert_eq!(GRUVBOX.validate(), Ok(()));
        assert_eq!(GRUVBOX.len(), 39);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(GRUVBOX.get("light0").map(|s| s.hex), Some("#fbf1c7"));
        assert!(GRUVBOX.contains("faded_orange"));
        assert!(!GRUVBOX.contains("light9"));
    }

    #[test]
    fn test_rgb_decoding() {
        assert_eq!(Swatch::new("x", "#1d2021").rgb(), Some((0x1d, 0x20, 0x21)));
        assert_eq!(Swatch::new("x", "#fff").rgb(), None);
        assert_eq!(Swatch::new("x", "1d2021").rgb(), None);
        assert_eq!(Swatch::new("x", "#1d202g").rgb(), None);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        static DUPES: &[Swatch] = &[
            Swatch::new("dark0", "#282828"),
            Swatch::new("dark0", "#1d2021"),
        ];
        assert_eq!(
            Palette::new(DUPES).validate(),
            Err(PaletteError::DuplicateToken("dark0".into()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_hex() {
        static BAD: &[Swatch] = &[Swatch::new("dark0", "#28282")];
        assert!(matches!(
            Palette::new(BAD).validate(),
            Err(PaletteError::InvalidHex { .. })
        ));
    }
}
