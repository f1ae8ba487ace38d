//! File I/O

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{coords::Size, error::Error};

/// Load a JSON array of sizes.
pub fn load_sizes(filename: &Path) -> Result<Vec<Size>, Error> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let sizes = serde_json::from_reader(reader)?;
    Ok(sizes)
}

pub fn save_sizes(sizes: &[Size], filename: &Path) -> Result<(), Error> {
    let file = File::create(filename)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, sizes)?;
    Ok(())
}
