use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::unsync::OnceCell;
use serde::Deserialize;

use crate::config::config::CATALOG_FILE;
use crate::core::error::{CatalogError, CatalogResult};

const BUNDLED_CATALOG: &str = include_str!("../../assets/data/paintings_data.json");

/// One artwork entry as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogRecord {
    pub title: String,
    pub author: String,
    pub year_created: String,
    pub image_identifier: String,
    pub content_description: String,
}

impl CatalogRecord {
    /// Year as shown after the author on the label: ` (1889)`.
    pub fn year_label(&self) -> String {
        format!(" ({})", self.year_created)
    }
}

/// Ordered, immutable list of paintings in file order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(text)?;
        Ok(Self { records })
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn record_at(&self, index: usize) -> CatalogResult<&CatalogRecord> {
        self.records.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            count: self.records.len(),
        })
    }

    #[cfg(test)]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }
}

/// Where the catalog text is read from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Data file compiled into the binary.
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    /// Prefers an unpacked data file under `assets_dir` over the compiled-in copy.
    pub fn discover(assets_dir: &Path) -> Self {
        let path = assets_dir.join(CATALOG_FILE);
        if path.is_file() {
            CatalogSource::File(path)
        } else {
            CatalogSource::Bundled
        }
    }

    fn name(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled paintings_data.json".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> CatalogResult<String> {
        match self {
            CatalogSource::Bundled => Ok(BUNDLED_CATALOG.to_string()),
            CatalogSource::File(path) => {
                fs::read_to_string(path).map_err(|source| CatalogError::DataUnavailable {
                    source_name: self.name(),
                    source,
                })
            }
        }
    }
}

/// Reads and parses the catalog once; later calls reuse the parsed result.
pub struct CatalogLoader {
    source: CatalogSource,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Loads the catalog, reading the source only on the first successful call.
    /// A failed load leaves the loader empty so nothing partial is ever exposed.
    pub fn load(&self) -> CatalogResult<Arc<Catalog>> {
        self.catalog
            .get_or_try_init(|| {
                tracing::debug!(source = %self.source.name(), "reading painting catalog");
                let text = self.source.read()?;
                let catalog = Catalog::from_json(&text)?;
                tracing::info!(count = catalog.count(), "painting catalog loaded");
                Ok(Arc::new(catalog))
            })
            .map(Arc::clone)
    }
}
