//! Shared test fixtures.
pub mod merkle;
