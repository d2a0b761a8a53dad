//! Core abstractions for the Bookstand streaming SSR platform.
//!
//! This crate provides the fundamental types:
//! - `ApiConfig` - Remote API configuration
//! - `Method` - HTTP method vocabulary shared by cache keys and logs
//! - `WorkloadError` - Errors surfaced by page handlers

mod config;
mod context;
mod workload;

pub use config::*;
pub use context::*;
pub use workload::*;
