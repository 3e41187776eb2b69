//! Business logic services

pub mod catalog;

use crate::store::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given store
    pub fn new(store: BookStore) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store),
        }
    }
}
