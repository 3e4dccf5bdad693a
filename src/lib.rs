//! # Claim engine
//!
//! Settlement of payment-gated reward claims. A payer transfers a fee token to the engine with a
//! Merkle proof in the transfer data; if the proof verifies against a published root and the
//! claim has not been settled before, the engine mints the reward batch to the payer.

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod registry;
pub mod service;
pub mod types;
