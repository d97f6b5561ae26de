//! Audio file discovery
//!
//! Walks the songs directory recursively and collects bare file names for
//! anything that looks playable in a browser. The page references songs by
//! relative URL (`songs/<name>`), so only names are kept, not paths; two
//! files with the same name in different subdirectories both appear in the
//! list and the page's link mapping resolves to whichever registered last.

use std::path::Path;
use walkdir::WalkDir;

/// Extensions the generated page can play via an `<audio>` element.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// Recursively collect audio file names under `dir`, in walk order.
///
/// Returns `None` when `dir` is missing or not a directory so the caller
/// can warn and continue with an empty set. Entries the walk cannot read
/// are skipped silently.
pub fn collect_song_files<P: AsRef<Path>>(dir: P) -> Option<Vec<String>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return None;
    }

    let files = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();

    Some(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    // ==========================================================================
    // DISCOVERY TESTS
    // ==========================================================================
    //
    // The scanner feeds the page's file set and, through it, the song-link
    // mapping and the Play All order. What matters: recursion, the extension
    // filter, names-not-paths, and tolerance for a missing directory.
    // ==========================================================================

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_collects_supported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.mp3"));
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("c.ogg"));
        touch(&dir.path().join("cover.jpg"));
        touch(&dir.path().join("notes.txt"));

        let mut files = collect_song_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["a.mp3", "b.wav", "c.ogg"]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("LOUD.MP3"));
        touch(&dir.path().join("quiet.Ogg"));

        let mut files = collect_song_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["LOUD.MP3", "quiet.Ogg"]);
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("album/disc2")).unwrap();
        touch(&dir.path().join("top.mp3"));
        touch(&dir.path().join("album/one.mp3"));
        touch(&dir.path().join("album/disc2/two.wav"));

        let mut files = collect_song_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["one.mp3", "top.mp3", "two.wav"]);
    }

    #[test]
    fn test_collects_names_not_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested/deep.mp3"));

        let files = collect_song_files(dir.path()).unwrap();
        assert_eq!(files, vec!["deep.mp3"]);
    }

    #[test]
    fn test_duplicate_basenames_both_appear() {
        // No deduplication across subdirectories; the page's link mapping
        // resolves duplicates last-registered-wins.
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        touch(&dir.path().join("a/same.mp3"));
        touch(&dir.path().join("b/same.mp3"));

        let files = collect_song_files(dir.path()).unwrap();
        assert_eq!(files, vec!["same.mp3", "same.mp3"]);
    }

    #[test]
    fn test_missing_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_song_files(dir.path().join("absent")).is_none());
    }

    #[test]
    fn test_file_path_is_none() {
        // A file where a directory was expected is the same diagnostic case
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("songs");
        touch(&file);
        assert!(collect_song_files(&file).is_none());
    }

    #[test]
    fn test_empty_directory_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(collect_song_files(dir.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_extensionless_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("README"));
        touch(&dir.path().join("track.mp3"));

        let files = collect_song_files(dir.path()).unwrap();
        assert_eq!(files, vec!["track.mp3"]);
    }
}
