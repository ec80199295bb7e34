//! ListSource implementations for different backends

#[cfg(feature = "remote")]
pub mod http;
#[cfg(feature = "in-memory")]
pub mod in_memory;

#[cfg(feature = "remote")]
pub use http::HttpListSource;
#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryListSource;
