// src/io/mod.rs
pub mod catalog_json;

use crate::error::{CipherError, CipherResult};
use crate::model::Catalog;
use std::path::Path;

/// Loads a catalog data asset, picking the reader from the file extension.
pub fn load_catalog(path: &Path) -> CipherResult<Catalog> {
    match extension(path).as_deref() {
        Some("json") => catalog_json::parse(path),
        _ => Err(CipherError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn save_catalog(path: &Path, catalog: &Catalog) -> CipherResult<()> {
    match extension(path).as_deref() {
        Some("json") => catalog_json::write(path, catalog),
        _ => Err(CipherError::UnsupportedFormat(path.display().to_string())),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
