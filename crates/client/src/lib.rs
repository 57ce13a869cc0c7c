//! Catalog client: fetches the remote catalog segment and holds the catalog a
//! page session works with.
//!
//! The session starts with the local segment only. Activating it issues a
//! single fetch of the remote segment; the returned [`RemoteLoad`] handle
//! abandons the fetch on cancel or drop, so a late response is never applied.

pub mod client;
pub mod load;
pub mod session;

pub use client::{CatalogClient, FetchError, ProductsEnvelope};
pub use load::{LoadOutcome, RemoteLoad};
pub use session::{CatalogSession, LOAD_FAILED_NOTICE, LoadStatus, SessionSnapshot};
