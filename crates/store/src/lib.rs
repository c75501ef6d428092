#![forbid(unsafe_code)]

pub mod client;
pub mod http;

pub use client::{InMemoryStore, ResponseStore, StoreError};
pub use http::{DEFAULT_STORE_URL, HttpStore, StoreConfig};
