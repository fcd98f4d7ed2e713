pub mod samples;
pub mod vcf;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{CustomError, Result};

/// Open a plain or gzip/bgzip-compressed text file for line reading.
pub(crate) fn open_text_or_gzip(path: &impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let f = File::open(path).map_err(|e| CustomError::ReadWithPath {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    match ext.as_deref() {
        Some("gz") | Some("bgz") => Ok(Box::new(BufReader::with_capacity(
            64 * 1024,
            MultiGzDecoder::new(f),
        ))),
        _ => Ok(Box::new(BufReader::with_capacity(64 * 1024, f))),
    }
}
