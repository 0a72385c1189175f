//! Federated music search across public provider APIs.
//!
//! Each provider implements [`SearchProvider`]; the [`SearchAggregator`]
//! fans a query out to every configured provider concurrently and
//! concatenates the results in provider registration order. A provider
//! that fails or times out contributes nothing and never fails the
//! overall search.

mod aggregator;
mod error;
mod provider;
pub mod providers;

pub use aggregator::SearchAggregator;
pub use error::SearchError;
pub use provider::{SearchProvider, SearchResult};

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, SearchError>;
