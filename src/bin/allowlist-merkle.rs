use allowlist_merkle::prelude::*;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Commit to a list of identifiers and print the root with every inclusion proof.
///
/// Identifiers are decimal or `0x`-prefixed hexadecimal integers of at most 256 bits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Identifiers to commit to
    ids: Vec<String>,

    /// File with additional identifiers, separated by whitespace or commas.
    /// `-` reads from stdin; `#` starts a comment.
    #[arg(long, short, env = "ALLOWLIST_INPUT")]
    input: Option<PathBuf>,

    /// Only print the proof of this identifier
    #[arg(long)]
    proof: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, env = "ALLOWLIST_PRETTY")]
    pretty: bool,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return io::read_to_string(io::stdin()).context("failed to read identifiers from stdin");
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "starting");

    let file = config.input.as_deref().map(read_input).transpose()?;

    let ids = config
        .ids
        .iter()
        .map(String::as_str)
        .chain(file.as_deref().into_iter().flat_map(tokens))
        .map(parse_identifier)
        .collect::<Result<Vec<_>>>()?;

    let allowlist = Allowlist::build(&ids)?;
    tracing::info!(
        identifiers = allowlist.len(),
        root = %allowlist.root(),
        max_proof_length = allowlist.max_proof_length(),
        "allow-list committed"
    );

    match config.proof {
        Some(id) => {
            let id = parse_identifier(&id)?;
            let proof = allowlist
                .proof(&id)
                .with_context(|| format!("{id} is not in the allow-list"))?;
            print_json(proof, config.pretty)
        }
        None => print_json(&allowlist.into_output(), config.pretty),
    }
}
