//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not five letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["water", "THERE", "Which"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "WATER");
        assert_eq!(words[1].text(), "THERE");
        assert_eq!(words[2].text(), "WHICH");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["water", "toolong", "abc", "x-ray", "about"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "WATER");
        assert_eq!(words[1].text(), "ABOUT");
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "water\n\n  about  \nnope\nthree").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["WATER", "ABOUT", "THREE"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
