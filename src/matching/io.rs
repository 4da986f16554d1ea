use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use super::types::Word;

/// Split raw bytes on `\n` into a word list.
///
/// Blank lines and the trailing entry after a final newline are kept as empty words;
/// counting handles them, the loader does not filter.
pub fn parse_word_list(bytes: &[u8]) -> Vec<Word> {
    bytes.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

/// Read a newline-separated word list from `path`, or from stdin when `path` is `-`.
pub fn load_word_list(path: &Path) -> Result<Vec<Word>> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("read word list from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("read word list {}", path.display()))?
    };
    Ok(parse_word_list(&bytes))
}

#[cfg(test)]
mod tests {
    use super::parse_word_list;

    fn words(v: &[&str]) -> Vec<Vec<u8>> {
        v.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn keeps_blank_and_trailing_entries() {
        assert_eq!(parse_word_list(b"a\n\nb\n"), words(&["a", "", "b", ""]));
    }

    #[test]
    fn empty_input_is_one_empty_word() {
        assert_eq!(parse_word_list(b""), words(&[""]));
    }

    #[test]
    fn carriage_return_is_not_stripped() {
        assert_eq!(parse_word_list(b"ab\r\ncd"), words(&["ab\r", "cd"]));
    }
}
