//! # Claim engine
//!
//! Operator CLI for payment-gated reward claims.
use clap::Parser;
use claim_engine::cli::Args;

fn main() {
    let args = Args::parse();
    if let Err(err) = args.run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
