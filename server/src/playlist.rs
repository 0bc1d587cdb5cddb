use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

/// One parsed entry from the song ID list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SongEntry {
    pub id: String,
    pub name: String,
}

/// Classifies one playlist line. Rules, in order:
///
/// 1. an ID followed by a separator (hyphen or whitespace, optionally padded
///    with spaces) and a non-empty name;
/// 2. a bare ID, named "Unknown Song";
/// 3. anything else is skipped; bare names like "Back" or "Rave" carry no ID.
pub fn parse_playlist_line(line: &str) -> Option<SongEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let digit_end = line
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(line.len());
    if digit_end == 0 {
        return None;
    }
    let (id, rest) = line.split_at(digit_end);

    if rest.is_empty() {
        return Some(SongEntry {
            id: id.to_string(),
            name: "Unknown Song".to_string(),
        });
    }

    let after_sep = if let Some(stripped) = rest.trim_start().strip_prefix('-') {
        stripped
    } else if rest.starts_with(char::is_whitespace) {
        rest
    } else {
        // e.g. "123abc": digits run straight into text, no separator.
        return None;
    };

    let name = after_sep.trim();
    if name.is_empty() {
        return None;
    }
    Some(SongEntry {
        id: id.to_string(),
        name: name.to_string(),
    })
}

/// Reads and parses the playlist file. A missing or unreadable file degrades
/// to an empty list.
pub fn load_playlist(path: &Path) -> Vec<SongEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "playlist file unavailable");
            return Vec::new();
        }
    };
    raw.lines().filter_map(parse_playlist_line).collect()
}
