//src/model/mod.rs
pub mod alphabet;
pub mod catalog;
pub mod element_info;
pub mod elements;

// Re-exports for cleaner imports
pub use alphabet::{Alphabet, TURKISH_ALPHABET};
pub use catalog::{AssetRecord, Catalog, CatalogAsset};
pub use elements::{ElementRecord, Layer, Position, COORDINATE_WIDTH};
