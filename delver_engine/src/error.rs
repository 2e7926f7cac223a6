//! Error types shared by the inventory, console and math modules.

use thiserror::Error;

/// Failures reported by the library.
///
/// File and save-game helpers wrap these (and I/O failures) in `anyhow` errors
/// with context; the lower-level modules return them directly.
#[derive(Error, Debug)]
pub enum DelverError {
    #[error("component name must not be empty")]
    EmptyName,

    #[error("weight must be a finite number, got {0}")]
    NonFiniteWeight(f64),

    #[error("a decorator needs a component to wrap")]
    MissingWrappedComponent,

    #[error("refusing to write zero new lines")]
    ZeroNewLines,

    #[error("range {min}..{max} contains no values with the requested bounds")]
    EmptyRange { min: i64, max: i64 },

    #[error("chance percentage {0} is outside 0..=100")]
    ChanceOutOfRange(i64),

    #[error("input closed before a valid answer was given")]
    InputClosed,

    #[error("invalid inventory definition: {0}")]
    InvalidDefinition(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
