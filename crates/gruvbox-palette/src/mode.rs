//! Role → token tables for one appearance.
//!
//! The light table is authored by hand ([`LIGHT_MODE`]). The dark table is
//! never written down: it is derived with [`ModeTable::invert`], which swaps
//! every token to its counterpart family and checks the result against the
//! palette.

use crate::error::{PaletteError, Result};
use crate::palette::Palette;
use crate::polarity::Inversion;

/// Which appearance a mode table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn opposite(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// A semantic UI role mapped to a palette token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeEntry {
    pub role: String,
    pub token: String,
}

/// The gruvbox light mode.
pub const LIGHT_MODE: &[(&str, &str)] = &[
    ("bg0", "light0"),
    ("bg0s", "light0_soft"),
    ("bg0h", "light0_hard"),
    ("bg1", "light1"),
    ("bg2", "light2"),
    ("bg3", "light3"),
    ("bg4", "light4"),
    ("gray", "gray_244"),
    ("fg0", "dark0"),
    ("fg1", "dark1"),
    ("fg2", "dark2"),
    ("fg3", "dark3"),
    ("fg4", "dark4"),
    ("fg4_256", "dark4_256"),
    ("red", "faded_red"),
    ("green", "faded_green"),
    ("yellow", "faded_yellow"),
    ("blue", "faded_blue"),
    ("purple", "faded_purple"),
    ("aqua", "faded_aqua"),
    ("orange", "faded_orange"),
];

/// An ordered role → token mapping for one appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTable {
    appearance: Appearance,
    entries: Vec<ModeEntry>,
}

impl ModeTable {
    pub fn new<R, T>(appearance: Appearance, entries: impl IntoIterator<Item = (R, T)>) -> Self
    where
        R: Into<String>,
        T: Into<String>,
    {
        Self {
            appearance,
            entries: entries
                .into_iter()
                .map(|(role, token)| ModeEntry {
                    role: role.into(),
                    token: token.into(),
                })
                .collect(),
        }
    }

    /// The authored gruvbox light table.
    pub fn gruvbox_light() -> Self {
        Self::new(Appearance::Light, LIGHT_MODE.iter().copied())
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the token a role points at.
    pub fn token_for(&self, role: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.token.as_str())
    }

    /// Checks that every referenced token exists in `palette`.
    pub fn validate(&self, palette: &Palette) -> Result<()> {
        match self.entries.iter().find(|e| !palette.contains(&e.token)) {
            Some(entry) => Err(PaletteError::MissingToken {
                role: entry.role.clone(),
                token: entry.token.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Derives the table for the opposite appearance.
    ///
    /// Every token is rewritten with `inversion`. Fails if a token has no
    /// family or if its counterpart is not in `palette`.
    pub fn invert(&self, palette: &Palette, inversion: Inversion) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let token = inversion.invert_token(&entry.token)?;
                if !palette.contains(&token) {
                    return Err(PaletteError::MissingToken {
                        role: entry.role.clone(),
                        token,
                    });
                }
                Ok(ModeEntry {
                    role: entry.role.clone(),
                    token,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            appearance: self.appearance.opposite(),
            entries,
        })
    }
}

impl<'a> IntoIterator for &'a ModeTable {
    type Item = &'a ModeEntry;
    type IntoIter = std::slice::Iter<'a, ModeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
