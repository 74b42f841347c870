use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

/// Subdirectories of a storage path that hold recordings
pub const RECORDING_DIRS: &[&str] = &["Movies", "TV"];

/// Scan every storage path for recording files.
///
/// Only regular files directly inside `<storage>/Movies` and `<storage>/TV`
/// are returned, in directory listing order. Any unreadable directory fails
/// the whole scan.
pub fn scan<S: AsRef<str>>(storage_paths: &[S]) -> Result<Vec<PathBuf>, ScanError> {
    scan_with_progress(storage_paths, |_, _| {})
}

/// Same as [`scan`], calling `on_dir` with each recording directory and the
/// number of entries listed in it
pub fn scan_with_progress<S, F>(
    storage_paths: &[S],
    mut on_dir: F,
) -> Result<Vec<PathBuf>, ScanError>
where
    S: AsRef<str>,
    F: FnMut(&Path, usize),
{
    let mut files = Vec::new();

    for storage_path in storage_paths {
        let storage_path = Path::new(storage_path.as_ref());
        debug!("Scanning storage path {}", storage_path.display());

        if storage_path.exists() && !storage_path.is_dir() {
            return Err(ScanError::NotADirectory {
                path: storage_path.to_path_buf(),
            });
        }

        for entry in list_dir(storage_path)? {
            if !is_recording_dir_name(&entry) {
                continue;
            }

            let dvr_dir = entry.path();
            // Dangling links fall through to list_dir and fail there
            if dvr_dir.exists() && !dvr_dir.is_dir() {
                warn!("Skipping {}: not a directory", dvr_dir.display());
                continue;
            }

            let recordings = list_dir(dvr_dir)?;
            on_dir(dvr_dir, recordings.len());

            for recording in recordings {
                let path = recording.path();
                if path.is_file() {
                    files.push(path.to_path_buf());
                } else {
                    debug!("Ignoring {}: not a regular file", path.display());
                }
            }
        }
    }

    Ok(files)
}

fn is_recording_dir_name(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| RECORDING_DIRS.contains(&name))
        .unwrap_or(false)
}

/// Immediate children of `dir`, in the order the OS reports them
fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ScanError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })
}
