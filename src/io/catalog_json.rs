// src/io/catalog_json.rs

use crate::error::CipherResult;
use crate::model::{Catalog, CatalogAsset};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn parse(path: &Path) -> CipherResult<Catalog> {
    let reader = BufReader::new(File::open(path)?);
    let asset: CatalogAsset = serde_json::from_reader(reader)?;
    let catalog = Catalog::try_from(asset)?;
    log::info!(
        "Catalog '{}' loaded from {:?} ({} letters)",
        catalog.version(),
        path,
        catalog.alphabet().len()
    );
    Ok(catalog)
}

pub fn write(path: &Path, catalog: &Catalog) -> CipherResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &catalog.to_asset())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
