//! JSON persistence of a result set.
//!
//! Output is a single pretty-printed array (2-space indent) with non-ASCII
//! text written literally.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::result::ResultSet;

/// Writes `results` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written and
/// [`Error::Json`] if serialization fails.
pub fn save_results(results: &ResultSet, path: &Path) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), sites = results.len(), "saved results");
    Ok(())
}

/// Reads a result set previously written by [`save_results`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Json`]
/// if it is not a valid result set.
pub fn load_results(path: &Path) -> Result<ResultSet> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
