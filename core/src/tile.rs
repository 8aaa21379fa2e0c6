use core::fmt;
use serde::{Deserialize, Serialize};

/// Content of one grid cell. Almost always a single lowercase letter; `q` is
/// always generated as the compound `Qu` tile so words built from the grid
/// stay orthographically plausible. A `Qu` tile occupies one cell and one
/// path step but contributes two letters to the candidate word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Letter(char),
    Qu,
}

impl Tile {
    pub fn from_letter(letter: char) -> Self {
        match letter.to_ascii_lowercase() {
            'q' => Self::Qu,
            other => Self::Letter(other),
        }
    }

    /// Number of letters this tile contributes to a word.
    pub const fn letter_count(self) -> usize {
        match self {
            Self::Qu => 2,
            Self::Letter(_) => 1,
        }
    }

    pub fn push_lowercase(self, out: &mut String) {
        match self {
            Self::Qu => out.push_str("qu"),
            Self::Letter(letter) => out.push(letter.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Qu => write!(f, "QU"),
            Self::Letter(letter) => write!(f, "{}", letter.to_ascii_uppercase()),
        }
    }
}
