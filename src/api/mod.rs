//! Access to the remote PokeAPI data source.
//!
//! The [`PokeApiClient`] is the only component that talks to the network. It
//! memoizes every resource it fetches for its own lifetime.

pub mod cache;
pub mod client;
pub mod transport;

pub use cache::ResourceCache;
pub use client::{Identified, PokeApiClient, DEFAULT_BASE_URL};
pub use transport::{HttpTransport, Transport};
