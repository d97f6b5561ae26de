//! Songboard - Interactive song embedding boards
//!
//! Songboard turns a set of precomputed 2D song embeddings and a directory
//! of audio files into one self-contained HTML page: a pan/zoom scatter
//! plot where every point is a playable song.
//!
//! # Overview
//!
//! Embedding pipelines (audio feature extraction + dimensionality
//! reduction) leave you with a JSON file of `{song_name, x, y}` records.
//! Songboard plots those records with D3.js and wires each marker to an
//! audio element, so clicking a point plays the song and nearby points
//! sound similar. The generated page is static: drop it next to the
//! `songs/` directory and open it in a browser.
//!
//! # Quick Start
//!
//! ```no_run
//! use songboard::{board, embeddings, scan, BoardData};
//!
//! let records = embeddings::load("song_embeddings.json").unwrap_or_default();
//! let files = scan::collect_song_files("songs").unwrap_or_default();
//!
//! let data = BoardData::new(records, files);
//! board::generate("interactive_song_board.html", &data).expect("write board");
//! ```
//!
//! # Input Tolerance
//!
//! A missing or malformed embeddings file and a missing songs directory are
//! reported, not fatal: the board is generated with whatever survived, down
//! to an empty page that explains itself. Mismatches between embedding
//! names and discovered files are left to the page, which logs unresolved
//! clicks to the browser console.
//!
//! # Modules
//!
//! - [`embeddings`]: tolerant loader for the embedding records
//! - [`scan`]: recursive audio file discovery
//! - [`board`]: output formats (interactive HTML, raw JSON)

pub mod board;
pub mod embeddings;
pub mod scan;

pub use board::BoardData;
pub use embeddings::{LoadError, SongEmbedding};
