//! HTTP client for the QB Reader quiz bowl API.
//!
//! This crate provides the main [`QbReaderClient`] for interacting with the
//! QB Reader API. Responses are validated into the records defined in
//! [`qbreader_core`].

#![doc(html_root_url = "https://docs.rs/qbreader-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{QbReaderClient, QbReaderClientBuilder};
pub use config::*;
pub use qbreader_core::{QbError, Result};
