//! Loads an earthquake catalog into a BST and reports the strongest quake and the catalog sorted
//! by magnitude.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use naive_bst::analysis;
use naive_bst::earthquake::Earthquake;
use naive_bst::tree::BinarySearchTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(about = "Sort an earthquake catalog by magnitude using a naive BST")]
struct Args {
    /// JSON file holding an array of `{"location", "magnitude", "year"}` records, like
    /// `demos/catalog.json`. The built-in sample catalog is used when omitted.
    path: Option<PathBuf>,

    /// Skip quakes weaker than this.
    #[arg(long)]
    min_magnitude: Option<f64>,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also draw the tree.
    #[arg(long)]
    show_tree: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    size: usize,
    height: isize,
    largest: Option<&'a Earthquake>,
    sorted: Vec<Earthquake>,
}

fn load(path: Option<&PathBuf>) -> Result<Vec<Earthquake>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(analysis::sample_catalog()),
    }
}

fn build(quakes: Vec<Earthquake>, min_magnitude: Option<f64>) -> BinarySearchTree<Earthquake> {
    let mut tree = BinarySearchTree::new();
    for quake in quakes {
        if min_magnitude.is_some_and(|min| quake.magnitude() < min) {
            eprintln!("skipping {}: below minimum magnitude", quake);
            continue;
        }
        if tree.contains(&quake) {
            eprintln!("skipping {}: magnitude already in the catalog", quake);
            continue;
        }
        tree.insert(quake);
    }

    tree
}

fn report(tree: &BinarySearchTree<Earthquake>) -> Report<'_> {
    Report {
        size: tree.size(),
        height: tree.height(),
        largest: analysis::find_largest_magnitude(tree),
        sorted: analysis::sorted_by_magnitude(tree),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let quakes = load(args.path.as_ref())?;
    let tree = build(quakes, args.min_magnitude);

    if args.show_tree {
        print!("{}", tree);
        println!();
    }

    let report = report(&tree);

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            println!("{} quakes, tree height {}", report.size, report.height);
            match report.largest {
                Some(largest) => println!("largest: {}", largest),
                None => println!("largest: none"),
            }
            for quake in &report.sorted {
                println!("  {}", quake);
            }
        }
    }

    Ok(())
}
