//! Catalog source chain.
//!
//! The resolver reads its catalog from an ordered list of providers: the
//! locally cached download, then the bundled asset, then the built-in
//! table. Each failure is logged and the next source is tried; the
//! built-in tail cannot fail, so the standard chain always yields a
//! catalog.

use std::path::PathBuf;

use al_core::errors::{Error, Result};
use tracing::{debug, warn};

use crate::builtin;
use crate::catalog::HolidayCatalog;

/// A single catalog source.
pub trait CatalogProvider: Send + Sync {
    /// Short source name for diagnostics.
    fn name(&self) -> &str;

    /// Load and parse the catalog from this source.
    fn load(&self) -> Result<HolidayCatalog>;
}

/// Catalog previously downloaded and persisted by the update manager.
#[derive(Debug)]
pub struct CachedFileProvider {
    path: PathBuf,
}

impl CachedFileProvider {
    /// Provider reading the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CachedFileProvider { path: path.into() }
    }
}

impl CatalogProvider for CachedFileProvider {
    fn name(&self) -> &str {
        "cached-download"
    }

    fn load(&self) -> Result<HolidayCatalog> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Io(format!("{}: {e}", self.path.display())))?;
        HolidayCatalog::from_json(&text)
    }
}

/// The default catalog bundled into the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledProvider;

const BUNDLED_CATALOG: &str = include_str!("../assets/holidays.json");

impl CatalogProvider for BundledProvider {
    fn name(&self) -> &str {
        "bundled"
    }

    fn load(&self) -> Result<HolidayCatalog> {
        HolidayCatalog::from_json(BUNDLED_CATALOG)
    }
}

/// Hardcoded last-resort catalog; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl CatalogProvider for BuiltinProvider {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<HolidayCatalog> {
        Ok(builtin::builtin_catalog())
    }
}

/// Walk `providers` in order and return the first catalog that loads,
/// together with the name of the source it came from.
///
/// Errors only if every provider fails (the standard chain ends in
/// [`BuiltinProvider`] and cannot).
pub fn load_first(providers: &[Box<dyn CatalogProvider>]) -> Result<(HolidayCatalog, String)> {
    let mut last_err = Error::Io("no catalog providers configured".into());
    for provider in providers {
        match provider.load() {
            Ok(catalog) => {
                debug!(
                    source = provider.name(),
                    version = %catalog.version,
                    "holiday catalog loaded"
                );
                return Ok((catalog, provider.name().to_string()));
            }
            Err(e) => {
                warn!(
                    source = provider.name(),
                    error = %e,
                    "catalog source failed, trying next"
                );
                last_err = e;
            }
        }
    }
    Err(last_err)
}
