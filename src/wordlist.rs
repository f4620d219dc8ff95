use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        None
    } else {
        Some(word.to_uppercase())
    }
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}
