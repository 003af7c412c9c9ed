//! Persisted state store.
//!
//! Two JSON files in one directory, rewritten in full on every update:
//! `test_status.json` (test_id → execution record) strictly before
//! `component_status.json` (component key → verification record). Each
//! write goes to a sibling temp file and is renamed into place, so readers
//! see either both old or both new files and never a verification that
//! outruns its executions.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use drip_schema::{ComponentVerification, TestExecution};

use crate::error::{Result, VerifyError};

pub const TEST_STATUS_FILE: &str = "test_status.json";
pub const COMPONENT_STATUS_FILE: &str = "component_status.json";

pub type ExecutionStore = BTreeMap<String, TestExecution>;
/// Keyed by component KEY (upper-cased name), matching the file format.
pub type VerificationStore = BTreeMap<String, ComponentVerification>;

fn persistence(path: &Path, source: std::io::Error) -> VerifyError {
    VerifyError::Persistence {
        path: path.to_path_buf(),
        source,
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp: PathBuf = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp).map_err(|e| persistence(&tmp, e))?;
    file.write_all(bytes).map_err(|e| persistence(&tmp, e))?;
    file.sync_all().map_err(|e| persistence(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| persistence(path, e))?;
    Ok(())
}

/// Write both stores, executions first.
pub fn save(dir: &Path, executions: &ExecutionStore, verifications: &VerificationStore) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| persistence(dir, e))?;

    let exec_path = dir.join(TEST_STATUS_FILE);
    let exec_json = serde_json::to_vec_pretty(executions).map_err(|e| VerifyError::StateFormat {
        path: exec_path.clone(),
        detail: e.to_string(),
    })?;
    write_atomic(&exec_path, &exec_json)?;

    let verif_path = dir.join(COMPONENT_STATUS_FILE);
    let verif_json =
        serde_json::to_vec_pretty(verifications).map_err(|e| VerifyError::StateFormat {
            path: verif_path.clone(),
            detail: e.to_string(),
        })?;
    write_atomic(&verif_path, &verif_json)
}

fn load_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<BTreeMap<String, T>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(persistence(path, e)),
    };
    // malformed records and unknown enum names are data errors, not
    // something to silently skip
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| VerifyError::StateFormat {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
}

/// Load both stores. Missing files mean initial state (empty maps);
/// `retain` filters out keys the current registries do not know, which are
/// discarded with a diagnostic.
pub fn load(
    dir: &Path,
    known_test: impl Fn(&str) -> bool,
    known_component_key: impl Fn(&str) -> bool,
) -> Result<(ExecutionStore, VerificationStore)> {
    let mut executions: ExecutionStore =
        load_file(&dir.join(TEST_STATUS_FILE))?.unwrap_or_default();
    executions.retain(|test_id, _| {
        let keep = known_test(test_id);
        if !keep {
            log::warn!("discarding persisted state for unknown test {test_id}");
        }
        keep
    });

    let mut verifications: VerificationStore =
        load_file(&dir.join(COMPONENT_STATUS_FILE))?.unwrap_or_default();
    verifications.retain(|key, _| {
        let keep = known_component_key(key);
        if !keep {
            log::warn!("discarding persisted state for unknown component {key}");
        }
        keep
    });

    Ok((executions, verifications))
}
