//! Results report: one matched path per line

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Overwrite the report at `path` with `matches`, one per line
pub fn write_report(path: &Path, matches: &[String]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create results report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for row in matches {
        writeln!(writer, "{}", row)
            .with_context(|| format!("Failed to write results report {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("Failed to write results report {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = matches.len(), "Results report written");
    Ok(())
}
