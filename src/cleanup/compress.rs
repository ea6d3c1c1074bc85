//! Compressing instead of deleting keeps expired audit lines readable
//! later while still reclaiming most of the disk space.

use crate::error::Error;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// In-place compression: writes `<path>.gz`, removes the original. Returns
/// bytes saved so callers can report totals.
pub(super) fn compress_file(path: &Path) -> Result<u64, Error> {
    let input = File::open(path)?;
    let original_size = input.metadata()?.len();
    let mut reader = BufReader::new(input);

    let gz_path = format!("{}.gz", path.display());
    let output = File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(output), Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    let compressed_size = fs::metadata(&gz_path)?.len();
    fs::remove_file(path)?;

    Ok(original_size.saturating_sub(compressed_size))
}
