use std::io::{self, Read};

/// Reads the whole stream and splits it into candidate lines. Trailing
/// whitespace is trimmed from the stream as a whole, so a final newline does
/// not produce an empty candidate; blank lines in the middle are kept.
pub fn read_candidates<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let text = String::from_utf8_lossy(&raw);
    Ok(text.trim_end().lines().map(str::to_owned).collect())
}
