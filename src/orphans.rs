use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extensions treated as recordings, matched case-insensitively
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mpg", ".mkv", ".avi", ".mov", ".ts"];

/// True when the path ends in one of [`VIDEO_EXTENSIONS`], ignoring case
pub fn is_video<P: AsRef<Path>>(path: P) -> bool {
    let lower = path.as_ref().to_string_lossy().to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Video files on disk whose exact path string is not a known recording path.
///
/// Order follows `disk_files`. Paths are compared verbatim: no case folding,
/// symlink resolution or separator cleanup.
pub fn find_orphans<S: AsRef<str>>(disk_files: &[PathBuf], known_paths: &[S]) -> Vec<PathBuf> {
    let known: HashSet<&str> = known_paths.iter().map(|p| p.as_ref()).collect();

    disk_files
        .iter()
        .filter(|file| is_video(file))
        .filter(|file| match file.to_str() {
            Some(path) => !known.contains(path),
            // Not representable in JSON, so the recorder cannot know it
            None => true,
        })
        .cloned()
        .collect()
}
