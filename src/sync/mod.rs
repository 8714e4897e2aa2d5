//! Client-side data synchronization.
//!
//! Wraps the transport with keyed caching, single-flight fetches, a
//! staleness window and invalidation after successful mutations. Views
//! read [`QueryState`] snapshots and track their own [`MutationState`].

mod cache;
mod client;
mod state;

pub use cache::{ChangeListener, FetchFuture, Fetcher, KeyedCache};
pub use client::{QueryClient, QueryKey, SyncConfig};
pub use state::{MutationState, QueryState};
