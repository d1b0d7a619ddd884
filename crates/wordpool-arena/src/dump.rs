//! Human-readable region map export.
//!
//! The map is the hole list rendered as `[offset, size] - [offset, size]`
//! in ascending offset order, with no trailing separator and no newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wordpool_core::HoleList;

use crate::error::PoolError;

/// Write the hole map to any sink and flush it.
pub fn write_hole_map<W: Write>(holes: &HoleList, mut sink: W) -> Result<(), PoolError> {
    sink.write_all(holes.to_string().as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the hole map to it.
pub fn dump_hole_map(holes: &HoleList, path: &Path) -> Result<(), PoolError> {
    let file = File::create(path)?;
    write_hole_map(holes, BufWriter::new(file))
}
