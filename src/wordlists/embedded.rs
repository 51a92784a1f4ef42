//! Embedded word list
//!
//! Used whenever the online word list cannot be fetched.

/// Built-in answer pool of common five-letter words
pub const DEFAULT_WORDS: &[&str] = &[
    "WHICH", "THERE", "THEIR", "ABOUT", "WOULD", "THESE", "OTHER", "WORDS", "COULD", "WRITE",
    "FIRST", "WATER", "AFTER", "WHERE", "RIGHT", "THINK", "THREE", "YEARS", "PLACE", "SOUND",
    "GREAT", "AGAIN", "STILL", "EVERY", "SMALL", "FOUND", "THOSE", "NEVER", "UNDER", "MIGHT",
];

/// Number of words in `DEFAULT_WORDS`
pub const DEFAULT_WORDS_COUNT: usize = 30;
