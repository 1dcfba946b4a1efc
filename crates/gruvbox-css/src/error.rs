//! Error types for stylesheet generation.

use std::path::PathBuf;

use gruvbox_palette::PaletteError;
use thiserror::Error;

/// A stylesheet could not be parsed by the formatter or minifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    #[error("CSS parse error at {line}:{column}: {message}")]
    Parse {
        /// 1-based line of the failing rule.
        line: u32,
        column: u32,
        message: String,
    },
}

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Css(#[from] CssError),

    /// Two custom properties derive the same export name.
    #[error("custom properties '{first}' and '{second}' both export as {name}")]
    ConstantCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
