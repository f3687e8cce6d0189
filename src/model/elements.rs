// src/model/elements.rs

use crate::error::{CatalogError, CoordinateError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters in one ciphertext coordinate ("RRCC").
pub const COORDINATE_WIDTH: usize = 4;

/// Periodic table position (row = period, col = group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row and column must each fit the two digits of a coordinate half.
    pub fn fits_coordinate(&self) -> bool {
        (1..=99).contains(&self.row) && (1..=99).contains(&self.col)
    }

    /// Zero-padded 4-digit coordinate, e.g. (1, 3) -> "0103"
    pub fn to_coordinate(&self) -> String {
        format!("{:02}{:02}", self.row, self.col)
    }

    /// Parses a 4-digit "RRCC" token back into a position.
    pub fn from_coordinate(token: &str) -> Result<Self, CoordinateError> {
        let len = token.chars().count();
        if len != COORDINATE_WIDTH {
            return Err(CoordinateError::Length(len));
        }
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoordinateError::NotNumeric(token.to_string()));
        }
        let row = token[0..2]
            .parse()
            .map_err(|_| CoordinateError::NotNumeric(token.to_string()))?;
        let col = token[2..4]
            .parse()
            .map_err(|_| CoordinateError::NotNumeric(token.to_string()))?;
        Ok(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({},{})", self.row, self.col))
    }
}

/// One of the three parallel letter -> element tables.
/// Serialized as its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Layer {
    First,
    Second,
    Third,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::First, Layer::Second, Layer::Third];
    pub const COUNT: usize = 3;

    /// Layer used by the `count`-th occurrence of a letter (count starts at 1):
    /// 1 -> First, 2 -> Second, 3 -> Third, 4 -> First ...
    pub fn for_occurrence(count: usize) -> Layer {
        Self::ALL[count.saturating_sub(1) % Self::COUNT]
    }

    pub fn index(self) -> usize {
        match self {
            Layer::First => 0,
            Layer::Second => 1,
            Layer::Third => 2,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number(), f)
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> u8 {
        layer.number()
    }
}

impl TryFrom<u8> for Layer {
    type Error = CatalogError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Layer::First),
            2 => Ok(Layer::Second),
            3 => Ok(Layer::Third),
            other => Err(CatalogError::InvalidLayer(other)),
        }
    }
}

/// One catalog entry: the element a letter maps to within a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    /// Electron configuration, e.g. "3d5 4s2". Only the embedded integers matter.
    pub orbital: String,
    pub outer_shell_count: u32,
    pub position: Position,
}

/// (letter, symbol, orbital, outer shell electrons, (row, col))
pub(crate) type RawRecord = (char, &'static str, &'static str, u32, (u8, u8));

impl ElementRecord {
    pub(crate) fn from_raw(raw: &RawRecord) -> (char, Self) {
        let (letter, symbol, orbital, outer_shell_count, (row, col)) = *raw;
        (
            letter,
            Self {
                symbol: symbol.to_string(),
                orbital: orbital.to_string(),
                outer_shell_count,
                position: Position::new(row, col),
            },
        )
    }
}

// --- Built-in layers (Turkish alphabet order) ---

/// Layer 1: main group s/p block and the first 3d row (H .. Cu)
pub(crate) const LAYER_1: [RawRecord; 29] = [
    ('A', "H", "1s1", 1, (1, 1)),
    ('B', "He", "1s2", 2, (1, 18)),
    ('C', "Li", "2s1", 1, (2, 1)),
    ('Ç', "Be", "2s2", 2, (2, 2)),
    ('D', "B", "2s2 2p1", 3, (2, 13)),
    ('E', "C", "2s2 2p2", 4, (2, 14)),
    ('F', "N", "2s2 2p3", 5, (2, 15)),
    ('G', "O", "2s2 2p4", 6, (2, 16)),
    ('Ğ', "F", "2s2 2p5", 7, (2, 17)),
    ('H', "Ne", "2s2 2p6", 8, (2, 18)),
    ('I', "Na", "3s1", 1, (3, 1)),
    ('İ', "Mg", "3s2", 2, (3, 2)),
    ('J', "Al", "3s2 3p1", 3, (3, 13)),
    ('K', "Si", "3s2 3p2", 4, (3, 14)),
    ('L', "P", "3s2 3p3", 5, (3, 15)),
    ('M', "S", "3s2 3p4", 6, (3, 16)),
    ('N', "Cl", "3s2 3p5", 7, (3, 17)),
    ('O', "Ar", "3s2 3p6", 8, (3, 18)),
    ('Ö', "K", "4s1", 1, (4, 1)),
    ('P', "Ca", "4s2", 2, (4, 2)),
    ('R', "Sc", "3d1 4s2", 2, (4, 3)),
    ('S', "Ti", "3d2 4s2", 2, (4, 4)),
    ('Ş', "V", "3d3 4s2", 2, (4, 5)),
    ('T', "Cr", "3d5 4s1", 1, (4, 6)),
    ('U', "Mn", "3d5 4s2", 2, (4, 7)),
    ('Ü', "Fe", "3d6 4s2", 2, (4, 8)),
    ('V', "Co", "3d7 4s2", 2, (4, 9)),
    ('Y', "Ni", "3d8 4s2", 2, (4, 10)),
    ('Z', "Cu", "3d10 4s1", 1, (4, 11)),
];

/// Layer 2: rest of period 4, period 5, start of period 6 (Zn .. Ce)
pub(crate) const LAYER_2: [RawRecord; 29] = [
    ('A', "Zn", "3d10 4s2", 2, (4, 12)),
    ('B', "Ga", "3d10 4s2 4p1", 3, (4, 13)),
    ('C', "Ge", "3d10 4s2 4p2", 4, (4, 14)),
    ('Ç', "As", "3d10 4s2 4p3", 5, (4, 15)),
    ('D', "Se", "3d10 4s2 4p4", 6, (4, 16)),
    ('E', "Br", "3d10 4s2 4p5", 7, (4, 17)),
    ('F', "Kr", "3d10 4s2 4p6", 8, (4, 18)),
    ('G', "Rb", "5s1", 1, (5, 1)),
    ('Ğ', "Sr", "5s2", 2, (5, 2)),
    ('H', "Y", "4d1 5s2", 2, (5, 3)),
    ('I', "Zr", "4d2 5s2", 2, (5, 4)),
    ('İ', "Nb", "4d4 5s1", 1, (5, 5)),
    ('J', "Mo", "4d5 5s1", 1, (5, 6)),
    ('K', "Tc", "4d5 5s2", 2, (5, 7)),
    ('L', "Ru", "4d7 5s1", 1, (5, 8)),
    ('M', "Rh", "4d8 5s1", 1, (5, 9)),
    ('N', "Pd", "4d10", 10, (5, 10)),
    ('O', "Ag", "4d10 5s1", 1, (5, 11)),
    ('Ö', "Cd", "4d10 5s2", 2, (5, 12)),
    ('P', "In", "4d10 5s2 5p1", 3, (5, 13)),
    ('R', "Sn", "4d10 5s2 5p2", 4, (5, 14)),
    ('S', "Sb", "4d10 5s2 5p3", 5, (5, 15)),
    ('Ş', "Te", "4d10 5s2 5p4", 6, (5, 16)),
    ('T', "I", "4d10 5s2 5p5", 7, (5, 17)),
    ('U', "Xe", "4d10 5s2 5p6", 8, (5, 18)),
    ('Ü', "Cs", "6s1", 1, (6, 1)),
    ('V', "Ba", "6s2", 2, (6, 2)),
    ('Y', "La", "5d1 6s2", 2, (6, 3)),
    ('Z', "Ce", "4f1 5d1 6s2", 2, (6, 4)),
];

/// Layer 3: lanthanides and the 5d/6p row (Pr .. Fr).
/// Most lanthanides keep 6s2 outside, hence the many 2s.
pub(crate) const LAYER_3: [RawRecord; 29] = [
    ('A', "Pr", "4f3 6s2", 2, (6, 5)),
    ('B', "Nd", "4f4 6s2", 2, (6, 6)),
    ('C', "Pm", "4f5 6s2", 2, (6, 7)),
    ('Ç', "Sm", "4f6 6s2", 2, (6, 8)),
    ('D', "Eu", "4f7 6s2", 2, (6, 9)),
    ('E', "Gd", "4f7 5d1 6s2", 2, (6, 10)),
    ('F', "Tb", "4f9 6s2", 2, (6, 11)),
    ('G', "Dy", "4f10 6s2", 2, (6, 12)),
    ('Ğ', "Ho", "4f11 6s2", 2, (6, 13)),
    ('H', "Er", "4f12 6s2", 2, (6, 14)),
    ('I', "Tm", "4f13 6s2", 2, (6, 15)),
    ('İ', "Yb", "4f14 6s2", 2, (6, 16)),
    ('J', "Lu", "4f14 5d1 6s2", 2, (6, 17)),
    ('K', "Hf", "4f14 5d2 6s2", 2, (6, 18)),
    ('L', "Ta", "5d3 6s2", 2, (7, 1)),
    ('M', "W", "5d4 6s2", 2, (7, 2)),
    ('N', "Re", "5d5 6s2", 2, (7, 3)),
    ('O', "Os", "5d6 6s2", 2, (7, 4)),
    ('Ö', "Ir", "5d7 6s2", 2, (7, 5)),
    ('P', "Pt", "5d9 6s1", 1, (7, 6)),
    ('R', "Au", "5d10 6s1", 1, (7, 7)),
    ('S', "Hg", "5d10 6s2", 2, (7, 8)),
    ('Ş', "Tl", "6p1 6s2 5d10", 3, (7, 9)),
    ('T', "Pb", "6p2 6s2 5d10", 4, (7, 10)),
    ('U', "Bi", "6p3 6s2 5d10", 5, (7, 11)),
    ('Ü', "Po", "6p4 6s2 5d10", 6, (7, 12)),
    ('V', "At", "6p5 6s2 5d10", 7, (7, 13)),
    ('Y', "Rn", "6p6 6s2 5d10", 8, (7, 14)),
    ('Z', "Fr", "7s1", 1, (7, 15)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::alphabet::TURKISH_ALPHABET;

    #[test]
    fn test_coordinate_format() {
        assert_eq!(Position::new(1, 3).to_coordinate(), "0103");
        assert_eq!(Position::new(4, 11).to_coordinate(), "0411");
        assert_eq!(Position::new(12, 0).to_coordinate(), "1200");
    }

    #[test]
    fn test_coordinate_range() {
        assert!(Position::new(1, 1).fits_coordinate());
        assert!(Position::new(99, 99).fits_coordinate());
        assert!(!Position::new(0, 5).fits_coordinate());
        assert!(!Position::new(7, 0).fits_coordinate());
        assert!(!Position::new(100, 1).fits_coordinate());
        assert!(!Position::new(1, 255).fits_coordinate());
    }

    #[test]
    fn test_coordinate_parse() {
        assert_eq!(Position::from_coordinate("0103"), Ok(Position::new(1, 3)));
        assert_eq!(Position::from_coordinate("7715"), Ok(Position::new(77, 15)));
        assert_eq!(Position::from_coordinate("12"), Err(CoordinateError::Length(2)));
        assert_eq!(
            Position::from_coordinate("01a3"),
            Err(CoordinateError::NotNumeric("01a3".to_string()))
        );
    }

    #[test]
    fn test_layer_cycles_every_three_occurrences() {
        let seen: Vec<u8> = (1..=7).map(|n| Layer::for_occurrence(n).number()).collect();
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
        // "Never used yet" behaves like a first use.
        assert_eq!(Layer::for_occurrence(0), Layer::First);
    }

    #[test]
    fn test_layer_number_roundtrip() {
        for layer in Layer::ALL {
            assert_eq!(Layer::try_from(u8::from(layer)), Ok(layer));
        }
        assert_eq!(Layer::try_from(4), Err(CatalogError::InvalidLayer(4)));
    }

    #[test]
    fn test_builtin_layers_follow_alphabet_order() {
        for layer in [&LAYER_1, &LAYER_2, &LAYER_3] {
            let letters: String = layer.iter().map(|r| r.0).collect();
            assert_eq!(letters, TURKISH_ALPHABET);
        }
    }
}
