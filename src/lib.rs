//! # kova-tx
//!
//! Builds Kova transaction envelopes (transfer, stake, delegate, ...) and
//! submits them to a node's `send_raw_tx` route.
//!
//! Envelopes come out unsigned with a zero nonce; signing and nonce
//! management belong to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kova_tx::{build_transfer, submit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tx = build_transfer("kova-devnet", "0x01", 100)?.with_nonce(7);
//!     let reply = submit("http://localhost:7000", &tx).await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!

#[macro_use]
extern crate serde;
extern crate serde_with;

mod address;
mod client;
mod envelope;
mod error;
mod result;
pub mod utils;

pub use address::{encode, Address};
pub use client::{submit, NodeClient, TxSubmitter};
pub use envelope::{
    build_delegate, build_stake, build_transfer, build_undelegate, build_unstake, Envelope,
    TxPayload,
};
pub use error::SdkError;
pub use result::SdkResult;
