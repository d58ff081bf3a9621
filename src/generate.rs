//! README generation
//!
//! The file boundary around the rewriter: read the source document in full,
//! rewrite it, then overwrite the destination.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::GenerateError;
use crate::rewriter::{rewrite_lines_with_stats, RewriteStats};

/// Read a document as newline-inclusive lines
///
/// `\r\n` endings are normalized to `\n`, so the output is LF throughout.
pub fn read_document(path: &Path) -> Result<Vec<String>, GenerateError> {
    let file = File::open(path).map_err(|e| GenerateError::source_unreadable(path, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| GenerateError::source_unreadable(path, e))?;
        if read == 0 {
            break;
        }
        if line.ends_with("\r\n") {
            line.truncate(line.len() - 2);
            line.push('\n');
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Overwrite `path` with `lines`, written back to back
///
/// Whatever reached the file before a failure stays there.
pub fn write_document<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), GenerateError> {
    let file = File::create(path).map_err(|e| GenerateError::destination_unwritable(path, e))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(|e| GenerateError::destination_unwritable(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| GenerateError::destination_unwritable(path, e))
}

fn rewrite_source(config: &Config) -> Result<(Vec<String>, RewriteStats), GenerateError> {
    let lines = read_document(&config.source)?;
    Ok(rewrite_lines_with_stats(&lines))
}

/// Regenerate the destination from the source
pub fn generate(config: &Config) -> Result<RewriteStats, GenerateError> {
    let (out, stats) = rewrite_source(config)?;
    write_document(&config.destination, &out)?;

    log::info!(
        "Wrote {} ({} of {} lines, {} headings dropped, {} demoted)",
        config.destination.display(),
        stats.lines_written,
        stats.lines_read,
        stats.headings_suppressed,
        stats.headings_demoted
    );

    Ok(stats)
}

/// Whether the destination already matches what `generate` would write
///
/// Never writes. A destination that cannot be read counts as stale.
pub fn check(config: &Config) -> Result<bool, GenerateError> {
    let (out, _) = rewrite_source(config)?;
    let expected = out.concat();

    match fs::read_to_string(&config.destination) {
        Ok(current) => Ok(current == expected),
        Err(e) => {
            log::warn!("Could not read {}: {}", config.destination.display(), e);
            Ok(false)
        }
    }
}
