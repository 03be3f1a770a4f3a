//! Core types for the QB Reader quiz bowl API client.
//!
//! This crate provides the data model shared by the client crates:
//!
//! - **Enumerations**: [`Category`] and [`Difficulty`], closed sets that validate raw API values
//! - **Questions**: [`Tossup`], [`Bonus`] and [`BonusPart`]
//! - **Packets**: [`Packet`], a sorted round of tossups and bonuses
//! - **Errors**: [`QbError`]
//!
//! # Example
//!
//! ```rust
//! use qbreader_core::{Difficulty, Packet, Result, Tossup};
//!
//! fn first_power(packet: &Packet) -> Option<&Tossup> {
//!     packet.tossups().iter().find(|t| t.powerable())
//! }
//!
//! # fn main() -> Result<()> {
//! let packet = Packet::new(Vec::new(), Vec::new(), 1, Difficulty::Open, "Example Set")?;
//! assert!(first_power(&packet).is_none());
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/qbreader-core/0.1.0")]

mod error;
pub mod types;

pub use error::{QbError, Result};
pub use types::*;
