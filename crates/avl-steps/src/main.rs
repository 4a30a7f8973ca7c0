//! `avl-steps` — insert keys into an AVL tree one by one and print the
//! in-order traversal after every step.
//!
//! Usage:
//!   avl-steps [--tree] [--check] [--stats] [KEYS...]
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=avl_tree=debug`
//! shows every rotation).

mod steps;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use steps::{render, Options, DEFAULT_KEYS};

#[derive(Parser, Debug)]
#[command(name = "avl-steps", about = "Print an AVL tree's in-order traversal after each insertion")]
struct Cli {
    /// Keys to insert, in order. Defaults to 7 9 13 21 34 36 45 54 65 87.
    #[arg(allow_negative_numbers = true)]
    keys: Vec<i64>,
    /// Also print the tree structure after each step.
    #[arg(long)]
    tree: bool,
    /// Validate the AVL invariants after each step.
    #[arg(long)]
    check: bool,
    /// Print rotation counters at the end.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let keys = if cli.keys.is_empty() {
        DEFAULT_KEYS.to_vec()
    } else {
        cli.keys
    };
    log::debug!("inserting {} keys", keys.len());

    let options = Options {
        tree: cli.tree,
        check: cli.check,
        stats: cli.stats,
    };
    let report = render(&keys, options)?;

    io::stdout()
        .write_all(report.as_bytes())
        .context("writing report to stdout")?;
    Ok(())
}
