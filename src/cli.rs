//! Command-line interface

use geom::{layout, storage, Size};
use itertools::Itertools;
use serde::Serialize;
use std::{fmt, path::PathBuf, str::FromStr};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "geom", about = "Combine and compare sizes")]
struct Opts {
    /// What to do with the sizes
    #[structopt(possible_values = Operation::NAMES)]
    operation: Operation,

    /// Sizes given as WIDTHxHEIGHT, e.g. 1.2x3.4
    sizes: Vec<Size>,

    /// JSON file with more sizes, appended after the ones on the command line
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[structopt(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Union,
    Intersect,
    Plus,
    PlusHorizontal,
    PlusVertical,
    Nears,
    Row,
    Column,
    Bounding,
    Common,
    Total,
}

impl Operation {
    const NAMES: &'static [&'static str] = &[
        "union",
        "intersect",
        "plus",
        "plus-horizontal",
        "plus-vertical",
        "nears",
        "row",
        "column",
        "bounding",
        "common",
        "total",
    ];
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "union" => Operation::Union,
            "intersect" => Operation::Intersect,
            "plus" => Operation::Plus,
            "plus-horizontal" => Operation::PlusHorizontal,
            "plus-vertical" => Operation::PlusVertical,
            "nears" => Operation::Nears,
            "row" => Operation::Row,
            "column" => Operation::Column,
            "bounding" => Operation::Bounding,
            "common" => Operation::Common,
            "total" => Operation::Total,
            _ => return Err(format!("unknown operation: {}", s)),
        })
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Outcome {
    Size(Size),
    Flag(bool),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Size(s) => write!(f, "{}", s),
            Outcome::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Main entry point. Parses command-line arguments and prints any errors.
/// On error, returns the exit code for `process::exit`.
pub fn main() -> Result<(), i32> {
    let opts = Opts::from_args();
    let mut sizes = opts.sizes;
    if let Some(filename) = opts.file {
        let loaded = storage::load_sizes(&filename).map_err(|err| {
            eprintln!(
                "Could not load file {}: {}",
                filename.to_string_lossy(),
                err
            );
            1
        })?;
        log::info!("Loaded {} sizes from {}", loaded.len(), filename.display());
        sizes.extend(loaded);
    }
    log::debug!("{:?} on [{}]", opts.operation, sizes.iter().join(", "));

    let outcome = apply(opts.operation, &sizes)?;
    if opts.json {
        let json = serde_json::to_string(&outcome).map_err(|err| {
            eprintln!("Could not format result: {}", err);
            1
        })?;
        println!("{}", json);
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

/// Apply the operation. Operations on a pair of sizes require exactly two.
fn apply(operation: Operation, sizes: &[Size]) -> Result<Outcome, i32> {
    let pair = || match sizes {
        [a, b] => Ok((*a, *b)),
        _ => {
            eprintln!(
                "{:?} takes exactly two sizes, got {}",
                operation,
                sizes.len()
            );
            Err(2)
        }
    };
    let all = sizes.iter().copied();
    Ok(match operation {
        Operation::Union => {
            let (a, b) = pair()?;
            Outcome::Size(a.union(b))
        }
        Operation::Intersect => {
            let (a, b) = pair()?;
            Outcome::Size(a.intersect(b))
        }
        Operation::Plus => {
            let (a, b) = pair()?;
            Outcome::Size(a.plus(b))
        }
        Operation::PlusHorizontal => {
            let (a, b) = pair()?;
            Outcome::Size(a.plus_horizontal(b))
        }
        Operation::PlusVertical => {
            let (a, b) = pair()?;
            Outcome::Size(a.plus_vertical(b))
        }
        Operation::Nears => {
            let (a, b) = pair()?;
            Outcome::Flag(a.nears(b))
        }
        Operation::Row => Outcome::Size(layout::row(all)),
        Operation::Column => Outcome::Size(layout::column(all)),
        Operation::Bounding => Outcome::Size(layout::bounding(all)),
        Operation::Common => match layout::common(all) {
            Some(s) => Outcome::Size(s),
            None => {
                eprintln!("No sizes given");
                return Err(1);
            }
        },
        Operation::Total => Outcome::Size(layout::total(all)),
    })
}
