use std::path::{Path, PathBuf};

use crate::config::MapEncoding;

/// Summary of one generator run. The seed itself is never written out.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RunReport {
    pub width: u32,
    pub height: u32,
    pub cells: usize,
    pub encoding: MapEncoding,
    pub shuffle_path: PathBuf,
    pub shuffle_bytes: usize,
    pub unshuffle_path: PathBuf,
    pub unshuffle_bytes: usize,
    /// Largest `|dx|` or `|dy|` in the shuffle map.
    pub max_displacement: f32,
}

/// Save a report to a JSON file.
pub fn save_report(path: &Path, report: &RunReport) -> Result<(), crate::CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Human-readable summary printed after a run.
pub fn format_summary(report: &RunReport) -> String {
    format!(
        "Generated {}x{} offset maps ({} cells, {:?})\n  shuffle:   {} ({} bytes)\n  unshuffle: {} ({} bytes)\n",
        report.width,
        report.height,
        report.cells,
        report.encoding,
        report.shuffle_path.display(),
        report.shuffle_bytes,
        report.unshuffle_path.display(),
        report.unshuffle_bytes,
    )
}
