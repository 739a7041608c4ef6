use std::io::Read;
use std::path::Path;

use super::AppraisalInput;

/// Failure to load a form snapshot handed over by the collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read appraisal snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid appraisal snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_snapshot_from_path<P: AsRef<Path>>(path: P) -> Result<AppraisalInput, SnapshotError> {
    let file = std::fs::File::open(path)?;
    load_snapshot_from_reader(file)
}

pub fn load_snapshot_from_reader<R: Read>(reader: R) -> Result<AppraisalInput, SnapshotError> {
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}
