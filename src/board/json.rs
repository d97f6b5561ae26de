//! JSON output format
//!
//! Dumps the board payload for programmatic consumption: the embedding
//! records, the discovered file names, and the derived playback links.

use crate::board::BoardData;
use crate::embeddings::SongEmbedding;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

#[derive(Serialize)]
struct BoardReport<'a> {
    embeddings: &'a [SongEmbedding],
    files: &'a [String],
    links: BTreeMap<String, String>,
}

pub fn write<W: Write>(writer: &mut W, data: &BoardData) -> io::Result<()> {
    let report = BoardReport {
        embeddings: &data.embeddings,
        files: &data.files,
        links: data.song_links(),
    };

    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_payload_round_trips() {
        let data = BoardData::new(
            vec![SongEmbedding {
                song_name: "a.mp3".to_string(),
                x: 0.25,
                y: -1.0,
            }],
            vec!["a.mp3".to_string(), "b.ogg".to_string()],
        );

        let mut out = Vec::new();
        write(&mut out, &data).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["embeddings"][0]["song_name"], "a.mp3");
        assert_eq!(value["embeddings"][0]["x"], 0.25);
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["links"]["b.ogg"], "songs/b.ogg");
    }

    #[test]
    fn test_json_empty_inputs() {
        let mut out = Vec::new();
        write(&mut out, &BoardData::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["embeddings"], serde_json::json!([]));
        assert_eq!(value["files"], serde_json::json!([]));
        assert_eq!(value["links"], serde_json::json!({}));
    }
}
