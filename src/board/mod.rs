//! Board generation
//!
//! This module turns the two input collections into an output artifact:
//!
//! - **HTML**: the self-contained interactive board (scatter plot + player)
//! - **JSON**: the same payload in machine-readable form
//!
//! # Usage
//!
//! ```ignore
//! use songboard::board::{self, BoardData};
//!
//! let data = BoardData::new(embeddings, files);
//! board::generate("interactive_song_board.html", &data)?; // HTML
//! board::generate("board.json", &data)?;                  // JSON
//! ```

pub mod html;
pub mod json;

use crate::embeddings::SongEmbedding;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Everything the generated page embeds: the embedding records and the
/// discovered audio file names, both in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardData {
    pub embeddings: Vec<SongEmbedding>,
    pub files: Vec<String>,
}

impl BoardData {
    pub fn new(embeddings: Vec<SongEmbedding>, files: Vec<String>) -> Self {
        Self { embeddings, files }
    }

    /// Map each discovered file name to its playback URL relative to the
    /// output document. The page rebuilds this mapping itself at load time;
    /// this copy feeds the JSON output format. Duplicate names collapse to
    /// one entry, matching the page's last-registered-wins behavior.
    pub fn song_links(&self) -> BTreeMap<String, String> {
        self.files
            .iter()
            .map(|f| (f.clone(), format!("songs/{}", f)))
            .collect()
    }
}

/// Generate the board in the appropriate format based on file extension.
///
/// `.json` gets the raw payload; everything else gets the HTML document.
pub fn generate<P: AsRef<Path>>(path: P, data: &BoardData) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, data),
        _ => html::write(&mut file, data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // BOARD DATA TESTS
    // ==========================================================================
    //
    // BoardData is the single source for both output formats. The derived
    // link mapping must track the file set exactly: empty set, empty map.
    // ==========================================================================

    fn embedding(name: &str, x: f64, y: f64) -> SongEmbedding {
        SongEmbedding {
            song_name: name.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_song_links_cover_every_file() {
        let data = BoardData::new(
            vec![embedding("a.mp3", 0.0, 0.0)],
            vec!["a.mp3".to_string(), "b.wav".to_string()],
        );

        let links = data.song_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links["a.mp3"], "songs/a.mp3");
        assert_eq!(links["b.wav"], "songs/b.wav");
    }

    #[test]
    fn test_song_links_empty_when_no_files() {
        let data = BoardData::new(vec![embedding("a.mp3", 0.0, 0.0)], vec![]);
        assert!(data.song_links().is_empty());
    }

    #[test]
    fn test_song_links_collapse_duplicates() {
        let data = BoardData::new(
            vec![],
            vec!["same.mp3".to_string(), "same.mp3".to_string()],
        );
        let links = data.song_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links["same.mp3"], "songs/same.mp3");
    }

    #[test]
    fn test_generate_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let data = BoardData::new(vec![embedding("a.mp3", 0.0, 0.0)], vec!["a.mp3".to_string()]);

        let html_path = dir.path().join("board.html");
        generate(&html_path, &data).unwrap();
        let html = std::fs::read_to_string(&html_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let json_path = dir.path().join("board.json");
        generate(&json_path, &data).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("embeddings").is_some());
    }

    #[test]
    fn test_generate_defaults_to_html() {
        let dir = tempfile::tempdir().unwrap();
        let data = BoardData::default();

        let path = dir.path().join("board.out");
        generate(&path, &data).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
    }
}
