//! Whitelist proof tool - print the Merkle root of a whitelist and inclusion
//! proofs for its entries
//!
//! Run: cargo run -p whitelist-proof -- --input data/whitelist.json prove --index 4

use alloy_primitives::B256;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use merkle_whitelist::{
    Encoding, EntryEncoder, Keccak256Hasher, Proof, ProofNode, ProofReport, RootReport, Side,
    TreeOptions, WhitelistEntry, WhitelistFile, WhitelistTree, verify_sorted,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitelist JSON file
    #[arg(short, long, env = "WHITELIST_INPUT", default_value = "data/whitelist.json")]
    input: PathBuf,

    /// Order each pair ascending before hashing
    #[arg(long, env = "WHITELIST_SORT_PAIRS")]
    sort_pairs: bool,

    /// Sort leaves before building the tree
    #[arg(long, env = "WHITELIST_SORT_LEAVES")]
    sort_leaves: bool,

    /// Hash an unpaired node with itself instead of promoting it
    #[arg(long, env = "WHITELIST_DUPLICATE_ODD")]
    duplicate_odd: bool,

    /// Leaf encoding (abi or packed), overrides the file
    #[arg(long, env = "WHITELIST_ENCODING")]
    encoding: Option<Encoding>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the Merkle root
    Root,
    /// Print the inclusion proof of one entry
    Prove {
        /// Entry to prove, defaults to the file's `proofIndex`, then 0
        #[arg(short, long, env = "WHITELIST_INDEX")]
        index: Option<usize>,
    },
    /// Check a proof against a root
    Verify {
        /// Leaf digest
        #[arg(long)]
        leaf: B256,
        /// Expected root
        #[arg(long)]
        root: B256,
        /// Sibling digests, leaf to root
        #[arg(long, num_args = 0..)]
        proof: Vec<B256>,
        /// Leaf index, required to verify proofs of unsorted trees
        #[arg(long)]
        index: Option<usize>,
        /// Number of leaves in the tree, required with --index
        #[arg(long, requires = "index")]
        leaf_count: Option<usize>,
    },
    /// Print the encoding and leaf of a single entry
    Encode {
        /// Entry address
        #[arg(long)]
        address: String,
        /// Entry amount
        #[arg(long)]
        amount: String,
    },
}

impl Args {
    fn cli_options(&self) -> TreeOptions {
        TreeOptions {
            sort_pairs: self.sort_pairs,
            sort_leaves: self.sort_leaves,
            duplicate_odd: self.duplicate_odd,
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match &args.command {
        Command::Root => {
            let (_, tree) = load_tree(&args)?;
            let report = RootReport::from(&tree);
            print_report(&report, args.json)?;
        }
        Command::Prove { index } => {
            let (file, tree) = load_tree(&args)?;
            let index = index.or(file.proof_index).unwrap_or(0);
            info!(index, "Generating proof");
            let proof = tree
                .proof(index)
                .with_context(|| format!("failed to generate proof for entry {index}"))?;
            if !proof.verify(&tree.root()) {
                bail!("generated proof for entry {index} does not verify");
            }
            let report = ProofReport::new(&tree, &proof);
            print_report(&report, args.json)?;
        }
        Command::Verify { leaf, root, proof, index, leaf_count } => {
            let valid = match (index, leaf_count) {
                (Some(index), Some(leaf_count)) => {
                    let proof = positioned_proof(*index, *leaf_count, proof, args.duplicate_odd)?;
                    proof.verify(*leaf, root, &args.cli_options())
                }
                (Some(_), None) => bail!("--index needs --leaf-count to place the siblings"),
                _ => verify_sorted(*leaf, proof, root),
            };
            if args.json {
                println!("{}", serde_json::json!({ "valid": valid }));
            } else {
                println!("Proof valid: {valid}");
            }
            if !valid {
                warn!(%leaf, %root, "Proof does not verify");
                std::process::exit(1);
            }
        }
        Command::Encode { address, amount } => {
            let entry = WhitelistEntry::parse(address, amount)?;
            let encoding = args.encoding.unwrap_or_default();
            let encoded = encoding.encode(&entry);
            let leaf = Keccak256Hasher::hash(&encoded);
            if args.json {
                let value = serde_json::json!({
                    "encoding": encoding.as_str(),
                    "encoded": format!("0x{}", alloy_primitives::hex::encode(&encoded)),
                    "leaf": format!("{leaf:#x}"),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Encoded ({encoding}): 0x{}", alloy_primitives::hex::encode(&encoded));
                println!("Leaf: {leaf:#x}");
            }
        }
    }

    Ok(())
}

/// Load the whitelist file and build its tree. CLI flags enable options on
/// top of the file's own.
fn load_tree(args: &Args) -> Result<(WhitelistFile, WhitelistTree)> {
    let file = WhitelistFile::from_path(&args.input)
        .with_context(|| format!("failed to load whitelist {}", args.input.display()))?;
    let entries = file.entries().context("invalid whitelist entry")?;
    let options = file.options.merge(args.cli_options());
    let encoding = args.encoding.unwrap_or(file.encoding);

    info!(
        input = %args.input.display(),
        entries = entries.len(),
        %encoding,
        sort_pairs = options.sort_pairs,
        "Building whitelist tree"
    );
    let tree = WhitelistTree::build(entries, &encoding, options)?;
    Ok((file, tree))
}

/// Rebuild sibling positions from the leaf index and tree size.
fn positioned_proof(
    index: usize,
    leaf_count: usize,
    siblings: &[B256],
    duplicate_odd: bool,
) -> Result<Proof> {
    if index >= leaf_count {
        bail!("leaf index {index} is out of range for {leaf_count} leaves");
    }

    let mut nodes = Vec::with_capacity(siblings.len());
    let mut remaining = siblings.iter();
    let (mut current_index, mut level_len) = (index, leaf_count);

    while level_len > 1 {
        let is_right = current_index % 2 == 1;
        let has_sibling = is_right || current_index + 1 < level_len || duplicate_odd;
        if has_sibling {
            let hash = *remaining.next().context("proof is shorter than the tree depth")?;
            nodes.push(ProofNode { position: if is_right { Side::Left } else { Side::Right }, hash });
        }
        current_index /= 2;
        level_len = level_len.div_ceil(2);
    }

    if remaining.next().is_some() {
        bail!("proof is longer than the tree depth");
    }
    Ok(Proof { leaf_index: index, nodes })
}

fn print_report<R>(report: &R, json: bool) -> Result<()>
where
    R: serde::Serialize + std::fmt::Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
