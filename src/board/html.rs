//! Interactive board document generation
//!
//! Writes a single self-contained HTML page: a D3.js pan/zoom scatter plot
//! of the embedding records wired to an in-page audio player. Both input
//! collections are serialized into the page as double-encoded JSON so the
//! script can `JSON.parse` them back regardless of what characters appear
//! in song names. D3 and Tailwind are loaded from CDNs; everything else is
//! inline.

use crate::board::BoardData;
use serde::Serialize;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, data: &BoardData) -> io::Result<()> {
    let embeddings_json = template_payload(&data.embeddings)?;
    let files_json = template_payload(&data.files)?;

    write!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Interactive Song Board</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://cdn.jsdelivr.net/npm/d3@7"></script>
    <style>
        body {{ font-family: 'Inter', sans-serif; }}
        #song-board {{
            width: 100%;
            height: 80vh;
            border: 1px solid #e5e7eb;
            border-radius: 0.5rem;
            background: #f9fafb;
        }}
        .song-circle {{
            cursor: pointer;
            border-radius: 50%;
            opacity: 0.7;
            transition: opacity 0.2s ease, stroke-width 0.2s ease;
            stroke: transparent;
            stroke-width: 0;
        }}
        .song-circle:hover {{ opacity: 1; stroke: #60a5fa; stroke-width: 2px; }}
        .song-circle.playing {{ stroke: #f59e0b; stroke-width: 4px; opacity: 1; }}
        #tooltip {{
            position: absolute;
            background: white;
            padding: 0.5rem;
            border: 1px solid #e5e7eb;
            border-radius: 0.25rem;
            font-size: 0.875rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            pointer-events: none;
            opacity: 0;
            transition: opacity 0.2s ease;
        }}
        #seek-bar::-webkit-slider-thumb {{
            -webkit-appearance: none;
            appearance: none;
            width: 1rem;
            height: 1rem;
            background-color: #2563eb;
            border-radius: 9999px;
            cursor: pointer;
            margin-top: -0.25rem;
        }}
        #seek-bar::-moz-range-thumb {{
            width: 1rem;
            height: 1rem;
            background-color: #2563eb;
            border-radius: 9999px;
            cursor: pointer;
            border: none;
        }}
    </style>
</head>
<body class="bg-gray-100 p-6">
    <div class="container mx-auto">
        <h1 class="text-2xl font-semibold text-gray-800 mb-4">Interactive Song Board</h1>
        <div id="song-board" class="relative mb-6"></div>

        <div id="player-controls" class="flex items-center justify-center space-x-4 w-full max-w-3xl mx-auto mb-2">
            <button id="toggle-play"
                class="w-10 h-10 bg-black hover:bg-gray-800 text-white rounded-full flex items-center justify-center focus:outline-none">
                <svg id="play-icon" xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M8 5v14l11-7z" />
                </svg>
                <svg id="pause-icon" xmlns="http://www.w3.org/2000/svg" class="h-5 w-5 hidden" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M6 19h4V5H6zm8-14v14h4V5h-4z" />
                </svg>
            </button>

            <div class="flex-1 flex items-center space-x-2">
                <span id="current-time" class="text-sm text-gray-700 w-10 text-right">0:00</span>
                <input id="seek-bar" type="range" min="0" value="0" step="0.1"
                    class="w-full h-2 bg-gray-300 rounded-lg appearance-none cursor-pointer">
                <span id="total-duration" class="text-sm text-gray-700 w-10">0:00</span>
            </div>
        </div>

        <div class="flex justify-center space-x-4 mb-4">
            <button id="play-all" class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">Play All</button>
            <button id="pause-all" class="bg-gray-300 hover:bg-gray-400 text-gray-800 font-bold py-2 px-4 rounded">Pause All</button>
        </div>
    </div>

    <script>
    const seekBar = document.getElementById('seek-bar');
    const togglePlayButton = document.getElementById('toggle-play');
    const currentTimeLabel = document.getElementById('current-time');
    const totalDurationLabel = document.getElementById('total-duration');
    const playIcon = document.getElementById('play-icon');
    const pauseIcon = document.getElementById('pause-icon');

    const songBoard = d3.select('#song-board');
    const tooltip = d3.select('body').append('div')
        .attr('id', 'tooltip')
        .style('opacity', 0);

    const songData = JSON.parse(`{embeddings}`);
    const songFiles = JSON.parse(`{files}`);

    // file name -> playback URL relative to this document; duplicates
    // collapse to the last-registered entry
    const songLinks = {{}};
    songFiles.forEach(f => {{ songLinks[f] = 'songs/' + f; }});

    // One lazily-created handle per song, kept for the page lifetime
    const audioElements = {{}};
    // The most recently targeted song; may be paused, not necessarily audible
    let playingAudio = null;

    function formatTime(seconds) {{
        const mins = Math.floor(seconds / 60);
        const secs = Math.floor(seconds % 60);
        return `${{mins}}:${{secs.toString().padStart(2, '0')}}`;
    }}

    function createSongBoard() {{
        const width = songBoard.node().clientWidth;
        const height = songBoard.node().clientHeight;
        const padding = 40;

        const svg = songBoard.append('svg').attr('width', width).attr('height', height);
        const container = svg.append('g');

        const xExtent = d3.extent(songData, d => d.x);
        const yExtent = d3.extent(songData, d => d.y);

        const xScale = d3.scaleLinear().domain(xExtent).range([padding, width - padding]);
        const yScale = d3.scaleLinear().domain(yExtent).range([padding, height - padding]);

        const circles = container.selectAll('circle')
            .data(songData).enter().append('circle')
            .attr('class', 'song-circle')
            .attr('r', 10)
            .attr('fill', () => `hsl(${{Math.random() * 360}}, 70%, 50%)`)
            .on('mouseover', (event, d) => {{
                tooltip.html(d.song_name)
                    .style('left', (event.pageX + 10) + 'px')
                    .style('top', (event.pageY - 28) + 'px')
                    .style('opacity', 1);
            }})
            .on('mouseout', () => tooltip.style('opacity', 0))
            .on('click', function (event, d) {{
                const url = songLinks[d.song_name];
                if (url) playSong(d.song_name, url, this);
                else console.error('Song URL not found for:', d.song_name, 'Available links:', songLinks);
            }});

        const labels = container.selectAll('text')
            .data(songData).enter().append('text')
            .text(d => d.song_name)
            .attr('font-size', '10px')
            .attr('fill', '#444');

        function updatePositions(xS, yS) {{
            circles.attr('cx', d => xS(d.x)).attr('cy', d => yS(d.y));
            labels.attr('x', d => xS(d.x) + 12).attr('y', d => yS(d.y) + 4);
        }}

        updatePositions(xScale, yScale);

        svg.call(d3.zoom().scaleExtent([0.5, 10]).on('zoom', e => {{
            const newX = e.transform.rescaleX(xScale);
            const newY = e.transform.rescaleY(yScale);
            updatePositions(newX, newY);
        }}));
    }}

    function playSong(songName, songUrl, circleElement) {{
        // Starting a different song always parks the previous one first
        if (playingAudio && playingAudio.name !== songName) {{
            playingAudio.audio.pause();
            d3.select(playingAudio.circle).classed('playing', false);
        }}

        if (!audioElements[songName]) {{
            const audio = new Audio(songUrl);

            audio.addEventListener('loadedmetadata', () => {{
                if (!isNaN(audio.duration)) {{
                    totalDurationLabel.textContent = formatTime(audio.duration);
                    seekBar.max = audio.duration;
                }}
            }});

            audio.addEventListener('timeupdate', () => {{
                if (!isNaN(audio.duration)) {{
                    seekBar.value = audio.currentTime;
                    currentTimeLabel.textContent = formatTime(audio.currentTime);
                    if (totalDurationLabel.textContent === '0:00' || totalDurationLabel.textContent === 'NaN:NaN') {{
                        totalDurationLabel.textContent = formatTime(audio.duration);
                        seekBar.max = audio.duration;
                    }}
                }}
            }});

            audio.addEventListener('ended', () => {{
                d3.select(circleElement).classed('playing', false);
                if (playingAudio && playingAudio.name === songName) {{
                    playingAudio = null;
                }}
                playIcon.classList.remove('hidden');
                pauseIcon.classList.add('hidden');
                // Seek bar and time labels keep their last values on purpose
            }});

            audio.addEventListener('play', () => {{
                d3.select(circleElement).classed('playing', true);
                if (!isNaN(audio.duration)) {{
                    totalDurationLabel.textContent = formatTime(audio.duration);
                    seekBar.max = audio.duration;
                }}
            }});

            audio.addEventListener('pause', () => {{
                d3.select(circleElement).classed('playing', false);
            }});

            audioElements[songName] = {{ audio, name: songName, circle: circleElement }};
            playingAudio = audioElements[songName];

            audio.play()
                .then(() => {{
                    playIcon.classList.add('hidden');
                    pauseIcon.classList.remove('hidden');
                }})
                .catch(e => console.error('Playback failed for ' + songName + ':', e));
        }} else {{
            const entry = audioElements[songName];
            const a = entry.audio;

            if (a.paused) {{
                if (playingAudio && playingAudio.name !== songName) {{
                    playingAudio.audio.pause();
                    d3.select(playingAudio.circle).classed('playing', false);
                }}
                a.play().catch(e => console.error('Playback failed for ' + songName + ':', e));
                playingAudio = entry;
            }} else {{
                a.pause();
                if (playingAudio && playingAudio.name === songName) {{
                    playingAudio = null;
                }}
            }}
        }}
    }}

    togglePlayButton.addEventListener('click', () => {{
        if (playingAudio && playingAudio.audio) {{
            if (playingAudio.audio.paused) {{
                playingAudio.audio.play();
                playIcon.classList.add('hidden');
                pauseIcon.classList.remove('hidden');
            }} else {{
                playingAudio.audio.pause();
                playIcon.classList.remove('hidden');
                pauseIcon.classList.add('hidden');
            }}
        }}
    }});

    seekBar.addEventListener('input', () => {{
        if (playingAudio && playingAudio.audio && !isNaN(playingAudio.audio.duration)) {{
            playingAudio.audio.currentTime = seekBar.value;
        }}
    }});

    document.getElementById('play-all').addEventListener('click', () => {{
        let currentSongIndex = 0;
        const songsToPlay = Object.keys(songLinks);

        function playNextSong() {{
            if (currentSongIndex >= songsToPlay.length) return;

            const songName = songsToPlay[currentSongIndex];
            const songUrl = songLinks[songName];
            const circleElement = d3.selectAll('.song-circle')
                .filter(d => d.song_name === songName)
                .node();

            if (circleElement) {{
                playSong(songName, songUrl, circleElement);
                if (audioElements[songName] && audioElements[songName].audio) {{
                    const currentAudio = audioElements[songName].audio;
                    const onEndedListener = () => {{
                        currentAudio.removeEventListener('ended', onEndedListener);
                        currentSongIndex++;
                        playNextSong();
                    }};
                    currentAudio.addEventListener('ended', onEndedListener);
                }} else {{
                    currentSongIndex++;
                    playNextSong();
                }}
            }} else {{
                // No marker for this file: skip without playing
                currentSongIndex++;
                playNextSong();
            }}
        }}

        playNextSong();
    }});

    document.getElementById('pause-all').addEventListener('click', () => {{
        Object.values(audioElements).forEach(entry => {{
            if (entry.audio && !entry.audio.paused) {{
                entry.audio.pause();
            }}
        }});
    }});

    if (songData && songData.length > 0) {{
        createSongBoard();
    }} else {{
        console.error('Song data is empty or not loaded correctly. Board not created.');
        songBoard.html('<p class="text-red-500 p-4">Error: No song data found to display.</p>');
    }}
    </script>
</body>
</html>
"#,
        embeddings = embeddings_json,
        files = files_json
    )?;

    Ok(())
}

/// Serialize `value` for embedding inside the page's JSON.parse template
/// literals.
///
/// The value is encoded twice: the inner pass produces the JSON text the
/// page will parse, the outer pass escapes that text as a string literal.
/// Stripping the outer quotes leaves literal-safe content. Backticks and
/// `${` would still terminate or interpolate the template literal, so both
/// are rewritten as unicode escapes on top of the JSON escaping.
fn template_payload<T: Serialize>(value: &T) -> io::Result<String> {
    let inner = serde_json::to_string(value)?;
    let outer = serde_json::to_string(&inner)?;
    let body = &outer[1..outer.len() - 1];

    Ok(body.replace('`', "\\u0060").replace("${", "\\u0024{"))
}
