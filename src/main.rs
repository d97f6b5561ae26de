use clap::Parser;
use songboard::{board, embeddings, scan, BoardData};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "songboard")]
#[command(author, version, about = "Render song embeddings as an interactive, playable scatter-plot board")]
struct Args {
    /// Directory scanned recursively for audio files (optional in GUI mode)
    path: Option<PathBuf>,

    /// Song embeddings JSON file
    #[arg(short, long, default_value = "song_embeddings.json")]
    embeddings: PathBuf,

    /// Output board file (.html, .json)
    #[arg(short, long, default_value = "interactive_song_board.html")]
    output: PathBuf,

    /// Launch GUI folder picker for the songs directory
    #[arg(long)]
    gui: bool,

    /// Don't prompt to open the board
    #[arg(long)]
    no_open: bool,

    /// Only show errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "gui")]
    let use_gui = args.gui;

    #[cfg(not(feature = "gui"))]
    let use_gui = {
        if args.gui {
            eprintln!("Note: GUI mode not available in this build; using the songs directory path.");
        }
        false
    };

    // Resolve the songs directory
    #[cfg(feature = "gui")]
    let songs_dir = if use_gui {
        match pick_songs_dir_gui() {
            Some(p) => p,
            None => {
                eprintln!("No folder selected.");
                std::process::exit(0);
            }
        }
    } else {
        args.path.clone().unwrap_or_else(|| PathBuf::from("songs"))
    };

    #[cfg(not(feature = "gui"))]
    let songs_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("songs"));

    if !args.quiet {
        eprintln!("\x1b[1mSongboard - Interactive Song Board Generator\x1b[0m");
        eprintln!("{}", "─".repeat(70));
    }

    // Load embeddings; every failure degrades to an empty record list
    let records = match embeddings::load(&args.embeddings) {
        Ok(records) => {
            if !args.quiet {
                eprintln!(
                    "Loaded {} embedding(s) from {}",
                    records.len(),
                    args.embeddings.display()
                );
            }
            records
        }
        Err(e) => {
            eprintln!("Warning: {}. Using empty data.", e);
            vec![]
        }
    };

    // Discover audio files; a missing directory degrades to an empty set
    let files = match scan::collect_song_files(&songs_dir) {
        Some(files) => {
            if files.is_empty() && !args.quiet {
                eprintln!(
                    "No audio files found in '{}' (supported: {})",
                    songs_dir.display(),
                    scan::AUDIO_EXTENSIONS.join(", ")
                );
            } else if !args.quiet {
                eprintln!("Found {} audio file(s) in {}", files.len(), songs_dir.display());
            }
            files
        }
        None => {
            eprintln!(
                "Warning: '{}' directory not found. No song files will be loaded.",
                songs_dir.display()
            );
            vec![]
        }
    };

    let data = BoardData::new(records, files);

    if let Err(e) = board::generate(&args.output, &data) {
        eprintln!("Failed to write board: {}", e);
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("\n\x1b[32mBoard saved: {}\x1b[0m", args.output.display());
        eprintln!("\x1b[90mKeep it next to the songs directory so playback links resolve.\x1b[0m");
    }

    // Open the board
    if !args.no_open {
        if use_gui {
            // In GUI mode, auto-open the board (no prompt)
            let _ = open::that(&args.output);
        } else if !args.quiet {
            // In terminal mode, ask first
            eprint!("\nOpen board in browser? [Y/n] ");
            io::stderr().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_ok() {
                let input = input.trim().to_lowercase();
                if input.is_empty() || input == "y" || input == "yes" {
                    if let Err(e) = open::that(&args.output) {
                        eprintln!("Failed to open board: {}", e);
                    }
                }
            }
        }
    }
}

#[cfg(feature = "gui")]
fn pick_songs_dir_gui() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select the songs directory")
        .pick_folder()
}
