use contracts::domain::a001_catalog::aggregate::Catalog;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Catalog set used when the configured file does not exist
const SEED_CATALOGS: &str = include_str!("../../../data/db.json");

static CATALOGS: OnceCell<Vec<Catalog>> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read catalog file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog store is not initialized")]
    NotInitialized,
}

/// Accepted file layouts: a bare array, or a json-server style database
/// object with a `Catalogs` collection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogSource {
    List(Vec<Catalog>),
    Database {
        #[serde(rename = "Catalogs")]
        catalogs: Vec<Catalog>,
    },
}

impl CatalogSource {
    fn into_catalogs(self) -> Vec<Catalog> {
        match self {
            CatalogSource::List(v) => v,
            CatalogSource::Database { catalogs } => catalogs,
        }
    }
}

pub fn parse_catalogs(json: &str) -> Result<Vec<Catalog>, CatalogStoreError> {
    let source: CatalogSource = serde_json::from_str(json)?;
    Ok(source.into_catalogs())
}

pub fn seed_catalogs() -> Result<Vec<Catalog>, CatalogStoreError> {
    parse_catalogs(SEED_CATALOGS)
}

pub fn load_from_file(path: &Path) -> Result<Vec<Catalog>, CatalogStoreError> {
    if !path.exists() {
        return Err(CatalogStoreError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalogs(&contents)
}

/// Install the catalog set. Later calls keep the first set.
pub fn initialize(catalogs: Vec<Catalog>) -> bool {
    CATALOGS.set(catalogs).is_ok()
}

pub fn list_all() -> Result<&'static [Catalog], CatalogStoreError> {
    CATALOGS
        .get()
        .map(Vec::as_slice)
        .ok_or(CatalogStoreError::NotInitialized)
}
