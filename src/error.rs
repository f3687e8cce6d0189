//! Error types for the periodic cipher.
//!
//! Encrypting and decrypting never fail: every anomaly inside a call is
//! recovered in place and reported through the step log. These types cover
//! everything around the cipher: catalog validation, coordinate parsing and
//! data-asset I/O.

use crate::model::{Layer, Position};
use thiserror::Error;

/// Problems found while validating an element catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),

    #[error("expected 3 layers, found {0}")]
    LayerCount(usize),

    #[error("layer {layer}: letter '{letter}' is not in the alphabet")]
    UnknownLetter { layer: Layer, letter: char },

    #[error("layer {layer}: letter '{letter}' has more than one record")]
    DuplicateRecord { layer: Layer, letter: char },

    #[error("layer {layer}: no record for letter '{letter}'")]
    MissingRecord { layer: Layer, letter: char },

    #[error("layer {layer}: position {position} of letter '{letter}' does not fit a 4-digit coordinate")]
    PositionOutOfRange {
        layer: Layer,
        letter: char,
        position: Position,
    },

    #[error("layer number must be 1, 2 or 3, got {0}")]
    InvalidLayer(u8),
}

/// A ciphertext token that is not a valid "RRCC" coordinate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("coordinate must be 4 characters, got {0}")]
    Length(usize),

    #[error("coordinate '{0}' is not numeric")]
    NotNumeric(String),
}

/// Root error type for everything outside a single encrypt/decrypt call.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

pub type CipherResult<T> = Result<T, CipherError>;
