//! Bitstamp REST API client for Rust.
//!
//! An async client for the Bitstamp v2 REST API. It covers the public
//! market-data endpoints and the HMAC-SHA256 signed private endpoints,
//! and normalizes the service's heterogeneous JSON (stringified
//! numbers, three timestamp encodings, `[price, amount]` arrays) into
//! [`rust_decimal::Decimal`] and UTC [`chrono::DateTime`] values.
//!
//! # What This Crate Provides
//!
//! - One typed async method per API operation: [`BitstampClient`]
//! - Request signing with fresh microsecond nonces: [`Credentials`]
//! - Wire-to-domain conversion rules, reusable on their own: [`normalize`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bitstamp_sdk::BitstampClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bitstamp_sdk::BitstampError> {
//!     let client = BitstampClient::new();
//!
//!     let ticker = client.ticker("btceur").await?;
//!     println!("last: {}", ticker.last);
//!
//!     let book = client.order_book("btceur", true).await?;
//!     println!("best bid: {:?}", book.bids.first());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Signed Calls
//!
//! Private endpoints take [`Credentials`] by reference per call; the
//! client never stores them. Every signed call carries a fresh
//! wall-clock nonce and an HMAC-SHA256 signature.
//!
//! ```rust,no_run
//! use bitstamp_sdk::{BitstampClient, Credentials};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bitstamp_sdk::BitstampError> {
//!     let client = BitstampClient::new();
//!     let credentials = Credentials::from_env()?;
//!
//!     for balance in client.account_balances(&credentials).await? {
//!         println!("{:?}: {} available", balance.currency, balance.available);
//!     }
//!
//!     let order = client
//!         .buy_limit_order(&credentials, "btceur", dec!(0.01), dec!(20000))
//!         .await?;
//!     if let Some(id) = &order.id {
//!         client.cancel_order(&credentials, id).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/)
//! facade for every API call and transport round-trip. Configure any
//! compatible logger in your binary, then set `RUST_LOG=debug` to inspect
//! request flow. Credentials and signatures are never logged.
//!
//! # Errors
//!
//! All fallible operations return [`BitstampError`]. Match specific
//! variants for robust handling:
//!
//! - Pre-network validation failures (`InvalidParameter`)
//! - Transport failures (`Http`) and undecodable bodies (`Json`)
//! - The service's error envelope (`Api`), with its detail verbatim
//! - Field-level conversion failures (`Normalize`)
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod transport;

// Re-export primary types for convenience.
pub use auth::Credentials;
pub use client::BitstampClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::{BitstampError, NormalizeError, Result};
pub use models::*;
