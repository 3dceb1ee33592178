//! Host-side playlist ingestion for the CLI demo only.
//!
//! This is the one place in the crate that touches the filesystem or a
//! CSV format — it exists to give the demo binary something real to
//! run against, not as part of the core (CSV ingestion is an
//! out-of-scope external collaborator).

use std::fs;
use std::io;
use std::path::Path;

/// Read a plain-text playlist: one song per line, blank lines dropped.
pub fn read_playlist_txt(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a playlist from a CSV file with a `Track Name` column, dropping
/// empty rows.
pub fn read_playlist_csv(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut songs = Vec::new();
    for record in reader.deserialize::<std::collections::HashMap<String, String>>() {
        let record = record?;
        if let Some(name) = record.get("Track Name") {
            let name = name.trim();
            if !name.is_empty() {
                songs.push(name.to_string());
            }
        }
    }
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_plain_text_playlist_and_drops_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Song A").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Song B").unwrap();

        let songs = read_playlist_txt(&path).unwrap();
        assert_eq!(songs, vec!["Song A".to_string(), "Song B".to_string()]);
    }

    #[test]
    fn reads_csv_track_name_column_and_drops_empty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Track Name,Artist").unwrap();
        writeln!(file, "Song A,Artist A").unwrap();
        writeln!(file, ",Artist B").unwrap();
        writeln!(file, "Song C,Artist C").unwrap();

        let songs = read_playlist_csv(&path).unwrap();
        assert_eq!(songs, vec!["Song A".to_string(), "Song C".to_string()]);
    }
}
