//! Error types for palette and mode table validation.

use thiserror::Error;

/// Errors raised while validating the palette or deriving a mode table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Two swatches share the same name.
    #[error("duplicate palette token '{0}'")]
    DuplicateToken(String),

    /// A swatch value is not a `#rrggbb` hex color.
    #[error("invalid hex color '{value}' for token '{token}' (expected #rrggbb)")]
    InvalidHex { token: String, value: String },

    /// A token name does not start with a known family keyword.
    #[error("token '{0}' has no recognized family (light, dark, bright, faded, neutral, gray)")]
    UnknownFamily(String),

    /// A mode entry (or its inversion) points at a token the palette lacks.
    #[error("role '{role}' references unknown palette token '{token}'")]
    MissingToken { role: String, token: String },
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
