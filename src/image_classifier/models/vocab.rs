use std::path::Path;

/// Reads one canonical class name per line, skipping blank lines.
pub fn read_vocab(path: &Path) -> std::io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_vocab(&contents))
}

pub fn parse_vocab(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
