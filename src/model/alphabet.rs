// src/model/alphabet.rs

use crate::error::CatalogError;

/// Letters of the Turkish alphabet, in rotation order.
pub const TURKISH_ALPHABET: &str = "ABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ";

/// Fixed, ordered letter ring. Index order defines rotation order.
/// Any character outside the ring is "foreign" and is never transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Builds a ring from `letters`, rejecting empty input and repeated letters.
    pub fn new(letters: &str) -> Result<Self, CatalogError> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(CatalogError::EmptyAlphabet);
        }
        for (i, c) in letters.iter().enumerate() {
            if letters[..i].contains(c) {
                return Err(CatalogError::DuplicateLetter(*c));
            }
        }
        Ok(Self { letters })
    }

    pub fn turkish() -> Self {
        Self {
            letters: TURKISH_ALPHABET.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    pub fn index_of(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&c| c == letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.index_of(letter).is_some()
    }

    /// Rotates `letter` forward by `shift` positions around the ring.
    /// Foreign characters come back unchanged.
    pub fn rotate_forward(&self, letter: char, shift: i64) -> char {
        self.rotate(letter, shift)
    }

    /// Inverse of [`Alphabet::rotate_forward`].
    pub fn rotate_backward(&self, letter: char, shift: i64) -> char {
        // Negate modulo the ring size so i64::MIN cannot overflow.
        let n = self.letters.len() as i64;
        self.rotate(letter, n - shift.rem_euclid(n))
    }

    fn rotate(&self, letter: char, shift: i64) -> char {
        let Some(index) = self.index_of(letter) else {
            return letter;
        };
        let n = self.letters.len() as i64;
        let new_index = (index as i64 + shift.rem_euclid(n)) % n;
        self.letters[new_index as usize]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::turkish()
    }
}
