//! Token families and the light/dark inversion table.
//!
//! Every gruvbox token name starts with a family keyword (`light0`,
//! `dark4_256`, `bright_red`, `gray_244`, ...). Deriving the dark mode is a
//! matter of swapping each referenced token to its counterpart family while
//! keeping the rest of the name:
//!
//! | Family    | Classic   | Symmetric |
//! |-----------|-----------|-----------|
//! | `light`   | `dark`    | `dark`    |
//! | `dark`    | `light`   | `light`   |
//! | `bright`  | `faded`   | `faded`   |
//! | `faded`   | `faded`   | `bright`  |
//! | `neutral` | `neutral` | `neutral` |
//! | `gray`    | `gray`    | `gray`    |
//!
//! `Classic` is the default and gives the published gruvbox dark mode, where
//! accents stay `faded`. `neutral` and `gray` are mode-invariant under both
//! rules. A name with no recognized family is rejected rather than passed
//! through.
//!
//! ```rust
//! use gruvbox_palette::{Inversion, Polarity};
//!
//! assert_eq!(Polarity::split("dark0_hard").unwrap(), (Polarity::Dark, "0_hard"));
//! assert_eq!(Inversion::Symmetric.invert_token("light0").unwrap(), "dark0");
//! assert_eq!(Inversion::Classic.invert_token("faded_red").unwrap(), "faded_red");
//! ```

use std::fmt;

use crate::error::{PaletteError, Result};

/// The family a token belongs to, read from its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Light,
    Dark,
    Bright,
    Faded,
    Neutral,
    Gray,
}

impl Polarity {
    pub const ALL: [Polarity; 6] = [
        Polarity::Light,
        Polarity::Dark,
        Polarity::Bright,
        Polarity::Faded,
        Polarity::Neutral,
        Polarity::Gray,
    ];

    /// The name prefix that marks this family.
    pub fn keyword(self) -> &'static str {
        match self {
            Polarity::Light => "light",
            Polarity::Dark => "dark",
            Polarity::Bright => "bright",
            Polarity::Faded => "faded",
            Polarity::Neutral => "neutral",
            Polarity::Gray => "gray",
        }
    }

    /// Splits a token name into its family and the remainder.
    ///
    /// The keyword must be followed by a digit, `_`, or the end of the name,
    /// so `darkness` is not a `dark` token.
    pub fn split(name: &str) -> Result<(Polarity, &str)> {
        for polarity in Self::ALL {
            if let Some(rest) = name.strip_prefix(polarity.keyword()) {
                let boundary = rest
                    .chars()
                    .next()
                    .map_or(true, |c| c == '_' || c.is_ascii_digit());
                if boundary {
                    return Ok((polarity, rest));
                }
            }
        }
        Err(PaletteError::UnknownFamily(name.to_string()))
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The rule used to derive dark-mode tokens from light-mode ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inversion {
    /// Keeps `faded` tokens as they are, so dark mode reuses the light
    /// accents.
    #[default]
    Classic,
    /// A true involution: inverting twice always gives back the input.
    Symmetric,
}

impl Inversion {
    /// Maps a family to its counterpart.
    pub fn invert(self, polarity: Polarity) -> Polarity {
        match (self, polarity) {
            (_, Polarity::Light) => Polarity::Dark,
            (_, Polarity::Dark) => Polarity::Light,
            (_, Polarity::Bright) => Polarity::Faded,
            (Inversion::Symmetric, Polarity::Faded) => Polarity::Bright,
            (Inversion::Classic, Polarity::Faded) => Polarity::Faded,
            (_, Polarity::Neutral) => Polarity::Neutral,
            (_, Polarity::Gray) => Polarity::Gray,
        }
    }

    /// Rewrites a token name into its counterpart family.
    ///
    /// This only rewrites the name; whether the result exists in a palette is
    /// checked by [`ModeTable::invert`](crate::ModeTable::invert).
    pub fn invert_token(self, name: &str) -> Result<String> {
        let (polarity, rest) = Polarity::split(name)?;
        Ok(format!("{}{}", self.invert(polarity).keyword(), rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_families() {
        assert_eq!(Polarity::split("light0").unwrap(), (Polarity::Light, "0"));
        assert_eq!(
            Polarity::split("dark4_256").unwrap(),
            (Polarity::Dark, "4_256")
        );
        assert_eq!(
            Polarity::split("bright_red").unwrap(),
            (Polarity::Bright, "_red")
        );
        assert_eq!(Polarity::split("gray").unwrap(), (Polarity::Gray, ""));
    }

    #[test]
    fn test_split_requires_boundary() {
        assert_eq!(
            Polarity::split("darkness"),
            Err(PaletteError::UnknownFamily("darkness".into()))
        );
        assert!(Polarity::split("crimson").is_err());
        assert!(Polarity::split("").is_err());
    }

    #[test]
    fn test_symmetric_inversion() {
        let inv = Inversion::Symmetric;
        assert_eq!(inv.invert_token("light0_soft").unwrap(), "dark0_soft");
        assert_eq!(inv.invert_token("dark1").unwrap(), "light1");
        assert_eq!(inv.invert_token("bright_aqua").unwrap(), "faded_aqua");
        assert_eq!(inv.invert_token("faded_aqua").unwrap(), "bright_aqua");
        assert_eq!(inv.invert_token("gray_244").unwrap(), "gray_244");
        assert_eq!(inv.invert_token("neutral_red").unwrap(), "neutral_red");
    }

    #[test]
    fn test_classic_keeps_faded() {
        let inv = Inversion::Classic;
        assert_eq!(inv.invert_token("faded_red").unwrap(), "faded_red");
        assert_eq!(inv.invert_token("bright_red").unwrap(), "faded_red");
        assert_eq!(inv.invert_token("light4").unwrap(), "dark4");
    }

    #[test]
    fn test_symmetric_is_involution_on_families() {
        for polarity in Polarity::ALL {
            let inv = Inversion::Symmetric;
            assert_eq!(inv.invert(inv.invert(polarity)), polarity);
        }
    }

    #[test]
    fn test_invariant_families() {
        for inv in [Inversion::Classic, Inversion::Symmetric] {
            assert_eq!(inv.invert(Polarity::Gray), Polarity::Gray);
            assert_eq!(inv.invert(Polarity::Neutral), Polarity::Neutral);
        }
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(Inversion::default(), Inversion::Classic);
        assert_eq!(
            Inversion::default().invert_token("faded_red").unwrap(),
            "faded_red"
        );
    }
}
