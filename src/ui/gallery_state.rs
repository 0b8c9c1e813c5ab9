use std::sync::Arc;

use crate::core::catalog::{Catalog, CatalogRecord};
use crate::core::error::{CatalogError, CatalogResult};

/// Cursor over the catalog. The index only ever moves within `0..=max_index`.
pub struct GalleryState {
    catalog: Arc<Catalog>,
    current_index: usize,
    // None when the catalog is empty.
    max_index: Option<usize>,
}

impl GalleryState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let max_index = catalog.count().checked_sub(1);
        Self {
            catalog,
            current_index: 0,
            max_index,
        }
    }

    pub fn current(&self) -> CatalogResult<&CatalogRecord> {
        if self.max_index.is_none() {
            return Err(CatalogError::EmptyCatalog);
        }
        self.catalog.record_at(self.current_index)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.max_index.is_some_and(|max| self.current_index < max)
    }

    /// Returns whether the cursor moved.
    pub fn go_previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the cursor moved.
    pub fn go_next(&mut self) -> bool {
        if self.can_go_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_paintings(&self) -> usize {
        self.catalog.count()
    }

    pub fn is_empty(&self) -> bool {
        self.max_index.is_none()
    }

    pub fn position_label(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index + 1, self.total_paintings())
    }
}
