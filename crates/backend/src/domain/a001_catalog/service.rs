use super::repository::{self, CatalogStoreError};
use contracts::domain::a001_catalog::aggregate::Catalog;
use std::path::Path;

/// Загрузка каталогов при старте сервера
///
/// A missing file is not fatal: the embedded seed set is served instead.
/// A file that exists but cannot be read or parsed stops startup.
pub fn initialize(path: &Path) -> anyhow::Result<usize> {
    let catalogs = match repository::load_from_file(path) {
        Ok(v) => {
            tracing::info!("Loaded catalogs from {}", path.display());
            v
        }
        Err(CatalogStoreError::NotFound(missing)) => {
            tracing::warn!(
                "Catalog file not found at {}, using embedded seed data",
                missing.display()
            );
            repository::seed_catalogs()?
        }
        Err(e) => return Err(e.into()),
    };

    let count = catalogs.len();
    if !repository::initialize(catalogs) {
        tracing::warn!("Catalog store already initialized, keeping existing data");
    }
    Ok(count)
}

/// Получение списка всех каталогов
pub async fn list_all() -> anyhow::Result<Vec<Catalog>> {
    Ok(repository::list_all()?.to_vec())
}
