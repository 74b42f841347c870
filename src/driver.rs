use std::io::Write;
use std::path::{Path, PathBuf};

use crate::args::Config;
use crate::client::RecorderClient;
use crate::error::OrphanError;
use crate::orphans::find_orphans;
use crate::scanner::scan_with_progress;

/// Run one reconciliation against the recorder described by `config`.
///
/// Progress and the final report are written to `out`. Returns the orphaned
/// files that were reported.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<PathBuf>, OrphanError> {
    writeln!(out, "Using Channels DVR at: {}", config.base_url)?;

    let client = RecorderClient::new(config.base_url.as_str(), config.timeout)
        .map_err(OrphanError::FetchRecordings)?;

    writeln!(out, "\nFetching recording paths from the server...")?;
    let recording_paths = client
        .fetch_recording_paths()
        .map_err(OrphanError::FetchRecordings)?;
    writeln!(
        out,
        " -> Retrieved {} recording paths from the server.",
        recording_paths.len()
    )?;

    writeln!(out, "\nFetching storage paths from the server...")?;
    let storage_paths = client
        .fetch_storage_paths()
        .map_err(OrphanError::FetchStoragePaths)?;
    writeln!(out, " -> Retrieved storage paths: {:?}", storage_paths)?;

    let disk_files = scan_storage(&storage_paths, out)?;

    let orphans = find_orphans(&disk_files, &recording_paths);
    render(&orphans, out)?;

    Ok(orphans)
}

fn scan_storage<W: Write>(
    storage_paths: &[String],
    out: &mut W,
) -> Result<Vec<PathBuf>, OrphanError> {
    writeln!(out, "\nChecking storage paths for files...")?;

    // The callback cannot return errors, so hold the first write failure
    let mut write_result = Ok(());
    let files = scan_with_progress(storage_paths, |dir: &Path, count| {
        if write_result.is_ok() {
            write_result = writeln!(out, " -> Found {} files in {}", count, dir.display());
        }
    })?;
    write_result?;

    writeln!(out, "-> Found a total of {} files on disks.", files.len())?;
    Ok(files)
}

/// Print the orphan count and paths, or a single line when there are none
pub fn render<W: Write, P: AsRef<Path>>(orphans: &[P], out: &mut W) -> std::io::Result<()> {
    if orphans.is_empty() {
        writeln!(out, "\nNo orphaned recordings found.")?;
        return Ok(());
    }

    writeln!(out, "\nFound {} orphaned recordings:", orphans.len())?;
    for orphan in orphans {
        writeln!(out, " -> {}", orphan.as_ref().display())?;
    }
    Ok(())
}
