//! Rust client for the QB Reader quiz bowl question database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use qbreader::{Category, Difficulty, QbReaderClient};
//!
//! #[tokio::main]
//! async fn main() -> qbreader::Result<()> {
//!     let client = QbReaderClient::new()?;
//!
//!     // A few random high school tossups
//!     let tossups = client
//!         .random()
//!         .tossups()
//!         .difficulties([Difficulty::HsRegular, Difficulty::HsHard])
//!         .categories([Category::Science])
//!         .number(3)
//!         .send()
//!         .await?;
//!
//!     for tossup in &tossups {
//!         println!("{tossup}\nANSWER: {}", tossup.answer());
//!     }
//!
//!     // A whole packet, read in order
//!     let packet = client.packets().packet("2023 PACE NSC", 1).await?;
//!     println!("{packet}");
//!     for (tossup, bonus) in &packet {
//!         println!("{}. {tossup}\n{bonus}", tossup.question_number());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/qbreader/0.1.0")]

// Re-export core types
pub use qbreader_core::*;

// Re-export client
pub use qbreader_client::{api, ClientConfig, QbReaderClient, QbReaderClientBuilder};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
