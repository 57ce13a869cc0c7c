use shopfront_products::{
    FilterRequest, Product, compare_by_id, filter, generate_local, generate_remote, merge_catalogs,
};

use crate::config::ApiConfig;

/// Catalog data served by the API.
///
/// Generated once at startup, so `/api/products` returns the same set for the
/// whole process lifetime.
#[derive(Debug, Clone)]
pub struct CatalogServices {
    remote: Vec<Product>,
    catalog: Vec<Product>,
}

impl CatalogServices {
    pub fn new(local_count: usize, remote_count: usize) -> Self {
        let remote = generate_remote(remote_count);
        let catalog = merge_catalogs(generate_local(local_count), remote.clone());

        tracing::info!(
            local_count,
            remote_count = remote.len(),
            catalog_size = catalog.len(),
            "catalog generated"
        );

        Self { remote, catalog }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.local_count, config.remote_count)
    }

    /// Segment served by the mock endpoint.
    pub fn remote_products(&self) -> &[Product] {
        &self.remote
    }

    /// Merged catalog (local segment first, then the remote segment).
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn search(&self, request: &FilterRequest) -> Vec<Product> {
        filter(&self.catalog, request)
    }

    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> String {
        compare_by_id(&self.catalog, a, b)
    }
}
