//! Shared HTTP plumbing

pub mod client;

pub use client::{HttpClient, HttpClientBuilder, USER_AGENT};
