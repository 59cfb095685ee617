//! JSON snapshot channel: flat-file export and import of the person store.
//!
//! # Responsibility
//! - Round-trip the full person collection as a JSON array with stable wire
//!   field names.
//! - Reject malformed payloads in full; a load never leaves a partial state.
//!
//! # Invariants
//! - Export is a pretty-printed array, matching the download format of the
//!   external dataset.
//! - Import parses the entire payload before anything is applied; callers
//!   replace their store only on `Ok`.

use crate::model::person::Person;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Result type used by snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors from snapshot export/import operations.
#[derive(Debug)]
pub enum SnapshotError {
    /// Payload is not valid JSON or not an array of person records.
    Malformed { detail: String },
    /// Underlying file read/write failure.
    Io(std::io::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { detail } => {
                write!(f, "snapshot payload is not a valid person array: {detail}")
            }
            Self::Io(err) => write!(f, "snapshot file access failed: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Serializes the full collection as a pretty-printed JSON array.
pub fn export_people(people: &[Person]) -> SnapshotResult<String> {
    serde_json::to_string_pretty(people).map_err(|err| SnapshotError::Malformed {
        detail: err.to_string(),
    })
}

/// Parses a JSON array of person records.
///
/// The whole payload is validated before returning; malformed JSON or a
/// non-array shape rejects the entire load.
pub fn parse_people(payload: &str) -> SnapshotResult<Vec<Person>> {
    match serde_json::from_str::<Vec<Person>>(payload) {
        Ok(people) => {
            info!(
                "event=snapshot_parse module=snapshot status=ok count={}",
                people.len()
            );
            Ok(people)
        }
        Err(err) => {
            warn!("event=snapshot_parse module=snapshot status=rejected detail={err}");
            Err(SnapshotError::Malformed {
                detail: err.to_string(),
            })
        }
    }
}

/// Writes the collection to a flat file.
pub fn save_to_path(path: &Path, people: &[Person]) -> SnapshotResult<()> {
    let payload = export_people(people)?;
    std::fs::write(path, payload)?;
    info!(
        "event=snapshot_save module=snapshot status=ok count={} path={}",
        people.len(),
        path.display()
    );
    Ok(())
}

/// Reads a collection from a flat file.
pub fn load_from_path(path: &Path) -> SnapshotResult<Vec<Person>> {
    let payload = std::fs::read_to_string(path)?;
    parse_people(&payload)
}
