//! Periodic table letter substitution cipher.
//!
//! Every letter of a fixed alphabet maps to an element in one of three
//! layers. The element's orbital notation and outer shell electron count give
//! a shift; the shifted letter is written as its 4-digit periodic table
//! coordinate ("RRCC"). Repeated letters cycle through the layers, so the
//! same letter encrypts differently on its 1st, 2nd and 3rd occurrence.
//!
//! Decryption reverses this with a stateful candidate search, reporting
//! ambiguous coordinates as [`AlternativeRecord`]s.
//!
//! ```
//! use periodic_cipher::PeriodicCipher;
//!
//! let cipher = PeriodicCipher::new();
//! let enc = cipher.encrypt("deg kn");
//! assert_eq!(enc.result, "040802170218 04070403");
//!
//! let dec = cipher.decrypt(&enc.result);
//! assert_eq!(dec.result, "DEG KN");
//! assert!(dec.alternatives.is_empty());
//! ```
//!
//! This is a puzzle cipher, not a security primitive.

pub mod cipher;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod utils;

pub use cipher::{
    AlternativeRecord, Candidate, Decryption, Encryption, MatchRecord, PeriodicCipher,
    StepObserver,
};
pub use error::{CatalogError, CipherError, CipherResult, CoordinateError};
pub use model::{Alphabet, Catalog, ElementRecord, Layer, Position};
