//! Test script discovery

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// One discoverable, independently runnable test script.
///
/// Immutable once discovered; the set of units for a run is fixed at
/// discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUnit {
    /// Display name, the script's file name
    pub name: String,
    /// Location of the executable script
    pub path: PathBuf,
}

/// Enumerate `dir` for regular files whose names start with `prefix`.
///
/// Results are sorted lexicographically by path so repeated runs execute
/// in the same order. An unreadable directory is the one fatal condition
/// in the whole run.
pub fn discover(dir: &Path, prefix: &str) -> Result<Vec<TestUnit>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::Discovery {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::Discovery {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        units.push(TestUnit {
            name: name.to_string(),
            path,
        });
    }

    units.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(units)
}
