//! Decode a card dump and print a summary.
//!
//! Usage:
//!   cargo run -p atmct --example read_card -- <dump.bin> [data-dir] [--raw] [--json]
//!
//! `data-dir` holds companies.json, lines.json, stops.json and titles.json.
//! Without it, codes are printed with their fallback rendering. Set
//! `RUST_LOG=debug` to see checksum mismatches as they are found.

use std::path::PathBuf;

use anyhow::Context;
use atmct::constants::DATA_BLOCK_COUNT;
use atmct::prelude::*;
use atmct::report;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Card memory dump, exactly 1024 bytes.
    dump: PathBuf,

    /// Directory holding the lookup tables.
    data_dir: Option<PathBuf>,

    /// Also print every data block in hex and binary.
    #[clap(short, long)]
    raw: bool,

    /// Print the decoded card as JSON instead of the summary.
    #[clap(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let card = Card::from_path(&args.dump)
        .with_context(|| format!("reading {}", args.dump.display()))?;
    let decoded = card.decode()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    let names = match &args.data_dir {
        Some(dir) => Resolvers::from_dir(dir)
            .with_context(|| format!("loading tables from {}", dir.display()))?,
        None => Resolvers::default(),
    };
    print!("{}", report::render(&decoded, &names));

    if args.raw {
        println!();
        print!("{}", report::raw_dump(&card, DATA_BLOCK_COUNT)?);
    }

    let unverified = decoded.unverified_addresses();
    if !unverified.is_empty() {
        let list: Vec<String> = unverified.iter().map(|a| format!("{:#05x}", a)).collect();
        eprintln!("checksum mismatch in {} block(s): {}", list.len(), list.join(", "));
    }
    Ok(())
}
