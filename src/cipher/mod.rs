// src/cipher/mod.rs

mod decoder;
mod encoder;
pub mod records;
pub mod shift;

pub use decoder::search_candidates;
pub use records::{
    AlternativeRecord, Candidate, Decryption, Encryption, MatchRecord, StepObserver, UsageCounter,
};
pub use shift::derive_shift;

use crate::model::Catalog;

/// Encrypt / decrypt bound to one element catalog.
///
/// Calls are independent: occurrence counters live only for the duration of
/// a single `encrypt` or `decrypt`.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicCipher<'c> {
    catalog: &'c Catalog,
}

impl PeriodicCipher<'static> {
    /// Cipher over the built-in Turkish catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin(),
        }
    }
}

impl Default for PeriodicCipher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> PeriodicCipher<'c> {
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn encrypt(&self, text: &str) -> Encryption {
        encoder::encrypt(self.catalog, text, None)
    }

    /// Like [`PeriodicCipher::encrypt`], reporting each step to `observer` as it happens.
    pub fn encrypt_with(&self, text: &str, observer: &mut dyn StepObserver) -> Encryption {
        encoder::encrypt(self.catalog, text, Some(observer))
    }

    pub fn decrypt(&self, text: &str) -> Decryption {
        decoder::decrypt(self.catalog, text, None)
    }

    pub fn decrypt_with(&self, text: &str, observer: &mut dyn StepObserver) -> Decryption {
        decoder::decrypt(self.catalog, text, Some(observer))
    }
}
