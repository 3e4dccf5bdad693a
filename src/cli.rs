//! # Claim engine CLI
//!
//! Operator tooling for claim batches: computes the root to publish, and the proof and
//! transfer data each claimer needs to settle.
use crate::types::{ClaimBatch, ClaimRequest, CostPolicy, PayloadLayout, ProofSchemeKind};
use clap::{Args as ClapArgs, Parser, Subcommand};
use eyre::OptionExt;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds roots, proofs and payloads for payment-gated reward claims.
#[derive(Debug, Parser)]
#[command(author, about = "Claim engine", long_about = None)]
pub struct Args {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Merkle root of a batch.
    Root(BatchArgs),
    /// Print the proof of one batch entry as JSON.
    Proof(EntryArgs),
    /// Print the transfer data that settles one batch entry.
    Payload(PayloadArgs),
}

/// Arguments shared by every command.
#[derive(Debug, ClapArgs)]
pub struct BatchArgs {
    /// The batch file.
    #[arg(long, value_name = "BATCH", env = "CLAIM_BATCH")]
    pub batch: PathBuf,
    /// How proof nodes are combined.
    #[arg(long, value_name = "SCHEME", default_value_t = ProofSchemeKind::SortedPairs)]
    pub scheme: ProofSchemeKind,
}

/// Arguments selecting one batch entry.
#[derive(Debug, ClapArgs)]
pub struct EntryArgs {
    /// The batch.
    #[command(flatten)]
    pub batch: BatchArgs,
    /// Index of the entry in the batch.
    #[arg(long, value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for [`Command::Payload`].
#[derive(Debug, ClapArgs)]
pub struct PayloadArgs {
    /// The entry.
    #[command(flatten)]
    pub entry: EntryArgs,
    /// How the claim cost is checked by the engine.
    #[arg(long, value_name = "POLICY", default_value_t = CostPolicy::Implicit)]
    pub cost_policy: CostPolicy,
}

impl Args {
    /// Runs the command.
    pub fn run(self) -> eyre::Result<()> {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();

        let output = match self.command {
            Command::Root(args) => root(&args)?,
            Command::Proof(args) => proof(&args)?,
            Command::Payload(args) => payload(&args)?,
        };
        println!("{output}");

        Ok(())
    }
}

fn root(args: &BatchArgs) -> eyre::Result<String> {
    let batch = ClaimBatch::load_from_file(&args.batch)?;
    let mut tree = batch.tree(args.scheme)?;
    let root = tree.root();
    info!(%root, leaves = tree.len(), height = tree.height(), "Built claim tree");
    Ok(root.to_string())
}

fn proof(args: &EntryArgs) -> eyre::Result<String> {
    let batch = ClaimBatch::load_from_file(&args.batch.batch)?;
    let element = batch.element(args.index).ok_or_eyre("batch entry out of range")?;
    let (root, proof) = batch.proof(args.index, args.batch.scheme)?;
    debug!(%root, index = args.index, siblings = proof.siblings.len(), "Built proof");

    let output = json!({
        "root": root,
        "leaf": element.leaf_hash(),
        "element": element,
        "proof": proof,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn payload(args: &PayloadArgs) -> eyre::Result<String> {
    let entry = &args.entry;
    let batch = ClaimBatch::load_from_file(&entry.batch.batch)?;
    let element = batch.element(entry.index).ok_or_eyre("batch entry out of range")?;
    let (root, proof) = batch.proof(entry.index, entry.batch.scheme)?;

    let request = ClaimRequest {
        root,
        epoch_salt: element.epoch_salt,
        proof: proof.siblings,
        item_ids: element.item_ids,
        amounts: element.amounts,
        cost: Some(element.cost),
        path: proof.path,
    };
    let layout = PayloadLayout::new(args.cost_policy, entry.batch.scheme);
    info!(
        %root,
        claimer = %element.claimer,
        amount = %element.cost,
        "Transfer this amount of fee token with the payload as data"
    );

    Ok(layout.encode(&request).to_string())
}
