//! Writing predicted labels as CSV.
use anyhow::{Context, Result};
use csv::Writer;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `ImageId,Label` rows, ids counting from 1 in input order.
pub fn write_predictions<P: AsRef<Path>>(path: P, labels: &[usize]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_predictions_to(file, labels).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} predictions to {}", labels.len(), path.display());
    Ok(())
}

pub fn write_predictions_to<W: Write>(writer: W, labels: &[usize]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["ImageId", "Label"])?;
    for (i, label) in labels.iter().enumerate() {
        wtr.write_record([(i + 1).to_string(), label.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
