//! Claim engine end-to-end test cases

mod fee_contract;
mod fixtures;
mod policies;
