use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use shopfront_products::{
    DEFAULT_LOCAL_COUNT, FilterRequest, Product, compare_by_id, filter, generate_local,
    merge_catalogs,
};

use crate::client::{CatalogClient, FetchError};
use crate::load::{LoadOutcome, RemoteLoad};

/// Notice shown when the remote segment could not be loaded.
pub const LOAD_FAILED_NOTICE: &str = "Could not load products from the API.";

/// Remote-segment load status of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load issued yet; local-only catalog.
    Idle,
    Loading,
    Loaded { at: DateTime<Utc> },
    /// The load failed; local-only catalog plus a notice.
    Failed,
}

/// Point-in-time copy of the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub products: Vec<Product>,
    pub status: LoadStatus,
    pub notice: Option<String>,
}

#[derive(Debug)]
struct SessionState {
    local: Vec<Product>,
    products: Vec<Product>,
    status: LoadStatus,
    notice: Option<String>,
}

/// Catalog held by one page session.
///
/// Cloning shares the same state.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    state: Arc<Mutex<SessionState>>,
}

impl CatalogSession {
    /// Session over a local segment; the remote segment is not loaded yet.
    pub fn new(local: Vec<Product>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                products: local.clone(),
                local,
                status: LoadStatus::Idle,
                notice: None,
            })),
        }
    }

    /// Session over the default generated local segment.
    pub fn with_default_catalog() -> Self {
        Self::new(generate_local(DEFAULT_LOCAL_COUNT))
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            products: state.products.clone(),
            status: state.status.clone(),
            notice: state.notice.clone(),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    pub fn status(&self) -> LoadStatus {
        self.lock().status.clone()
    }

    pub fn notice(&self) -> Option<String> {
        self.lock().notice.clone()
    }

    /// Filter the current catalog.
    pub fn search(&self, request: &FilterRequest) -> Vec<Product> {
        filter(&self.lock().products, request)
    }

    /// Compare two selections of the current catalog by id.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> String {
        compare_by_id(&self.lock().products, a, b)
    }

    /// Start the one-time load of the remote segment.
    ///
    /// Must be called from within a tokio runtime. The result is merged into
    /// the catalog (local entries win on id collisions) unless the returned
    /// handle was cancelled or dropped first.
    pub fn activate(&self, client: CatalogClient) -> RemoteLoad {
        {
            let mut state = self.lock();
            state.status = LoadStatus::Loading;
            state.notice = None;
        }

        let cancellation = Arc::new(AtomicBool::new(false));
        let session = self.clone();
        let flag = cancellation.clone();

        let task = tokio::spawn(async move {
            let result = client.fetch_products().await;
            session.apply(result, &flag)
        });

        RemoteLoad::new(cancellation, task)
    }

    fn apply(&self, result: Result<Vec<Product>, FetchError>, cancellation: &AtomicBool) -> LoadOutcome {
        let mut state = self.lock();

        // Checked under the lock so an abandoned load never touches state.
        if cancellation.load(Ordering::Acquire) {
            tracing::debug!("remote catalog load abandoned; discarding response");
            return LoadOutcome::Abandoned;
        }

        match result {
            Ok(remote) => {
                let local_len = state.local.len();
                let merged = merge_catalogs(state.local.clone(), remote);
                let added = merged.len() - local_len;

                tracing::info!(added, catalog_size = merged.len(), "remote catalog merged");

                state.products = merged;
                state.status = LoadStatus::Loaded { at: Utc::now() };
                state.notice = None;
                LoadOutcome::Merged { added }
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote catalog load failed");

                state.status = LoadStatus::Failed;
                state.notice = Some(LOAD_FAILED_NOTICE.to_string());
                LoadOutcome::Failed(e)
            }
        }
    }
}
