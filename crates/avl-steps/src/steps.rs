//! Staged insertion report: insert keys one at a time and print the in-order
//! traversal after each step.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use avl_tree::AvlTree;

/// Keys inserted when none are given on the command line.
pub const DEFAULT_KEYS: [i64; 10] = [7, 9, 13, 21, 34, 36, 45, 54, 65, 87];

const ORDINALS: [&str; 10] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Print the tree dump after each step.
    pub tree: bool,
    /// Validate every invariant after each step.
    pub check: bool,
    /// Print rotation counters at the end.
    pub stats: bool,
}

fn step_label(step: usize) -> String {
    match ORDINALS.get(step - 1) {
        Some(word) => format!("Step {word}:"),
        None => format!("Step {step}:"),
    }
}

/// Builds the full report for `keys`.
pub fn render(keys: &[i64], options: Options) -> Result<String> {
    let mut out = String::new();
    let mut tree = AvlTree::new();

    writeln!(
        out,
        "{} numbers are inserted in an AVL Tree one by one and the in-order traversal is printed in each step below:",
        keys.len()
    )?;

    for (i, &key) in keys.iter().enumerate() {
        let step = i + 1;
        if !tree.insert(key) {
            log::info!("step {step}: key {key} already present");
        }
        if options.check {
            tree.assert_valid()
                .with_context(|| format!("invariant broken after inserting {key} at step {step}"))?;
        }

        write!(out, "\n{}\n", step_label(step))?;
        for k in tree.inorder() {
            write!(out, " {k}")?;
        }
        out.push('\n');
        if options.tree {
            writeln!(out, "{}", tree.dump())?;
        }
    }

    if options.stats {
        let stats = tree.rotations();
        write!(
            out,
            "\nRotations: {} (left-left {}, left-right {}, right-right {}, right-left {})\n",
            stats.total(),
            stats.left_left,
            stats.left_right,
            stats.right_right,
            stats.right_left
        )?;
    }

    Ok(out)
}
