// src/model/catalog.rs

use crate::error::CatalogError;
use crate::model::alphabet::{Alphabet, TURKISH_ALPHABET};
use crate::model::elements::{
    ElementRecord, Layer, Position, RawRecord, LAYER_1, LAYER_2, LAYER_3,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Version tag of the compiled-in catalog
pub const BUILTIN_VERSION: &str = "tr29-v1";

// Built once, shared read-only by every encrypt/decrypt call
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Three complete letter -> element tables plus the derived reverse index.
///
/// Each layer is stored as a vector indexed by the letter's ordinal in the
/// alphabet, so a loaded catalog always has exactly one record per letter
/// per layer.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    alphabet: Alphabet,
    layers: [Vec<ElementRecord>; 3],
    by_position: HashMap<Position, (Layer, char)>,
}

impl Catalog {
    /// The compiled-in Turkish catalog.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            log::debug!("Initializing built-in element catalog ({})", BUILTIN_VERSION);
            Self::assemble(
                BUILTIN_VERSION.to_string(),
                Alphabet::turkish(),
                [
                    builtin_layer(&LAYER_1),
                    builtin_layer(&LAYER_2),
                    builtin_layer(&LAYER_3),
                ],
            )
        })
    }

    /// Builds and validates a catalog from unordered `(letter, record)` lists,
    /// one list per layer.
    pub fn new(
        version: impl Into<String>,
        alphabet: Alphabet,
        layers: [Vec<(char, ElementRecord)>; 3],
    ) -> Result<Self, CatalogError> {
        let mut ordered: [Vec<ElementRecord>; 3] = Default::default();

        for (layer, entries) in Layer::ALL.into_iter().zip(layers) {
            let mut slots: Vec<Option<ElementRecord>> = vec![None; alphabet.len()];
            for (letter, record) in entries {
                let index = alphabet
                    .index_of(letter)
                    .ok_or(CatalogError::UnknownLetter { layer, letter })?;
                if slots[index].is_some() {
                    return Err(CatalogError::DuplicateRecord { layer, letter });
                }
                if !record.position.fits_coordinate() {
                    return Err(CatalogError::PositionOutOfRange {
                        layer,
                        letter,
                        position: record.position,
                    });
                }
                slots[index] = Some(record);
            }

            let mut records = Vec::with_capacity(slots.len());
            for (index, slot) in slots.into_iter().enumerate() {
                match slot {
                    Some(record) => records.push(record),
                    None => {
                        let letter = alphabet.letters()[index];
                        return Err(CatalogError::MissingRecord { layer, letter });
                    }
                }
            }
            ordered[layer.index()] = records;
        }

        Ok(Self::assemble(version.into(), alphabet, ordered))
    }

    // Layers must already be complete and in alphabet order.
    fn assemble(version: String, alphabet: Alphabet, layers: [Vec<ElementRecord>; 3]) -> Self {
        // First match wins: layer 1, 2, 3, then alphabet order inside a layer.
        let mut by_position = HashMap::new();
        for layer in Layer::ALL {
            for (letter, record) in alphabet.letters().iter().zip(&layers[layer.index()]) {
                by_position
                    .entry(record.position)
                    .or_insert((layer, *letter));
            }
        }

        Self {
            version,
            alphabet,
            layers,
            by_position,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Record for `letter` in `layer`, `None` for foreign characters.
    pub fn record(&self, letter: char, layer: Layer) -> Option<&ElementRecord> {
        let index = self.alphabet.index_of(letter)?;
        self.layers[layer.index()].get(index)
    }

    /// First record keyed by `letter`, searching layers 1 -> 2 -> 3.
    pub fn locate(&self, letter: char) -> Option<(Layer, &ElementRecord)> {
        Layer::ALL
            .into_iter()
            .find_map(|layer| self.record(letter, layer).map(|r| (layer, r)))
    }

    /// Reverse lookup of a table position.
    pub fn letter_at(&self, position: Position) -> Option<(Layer, char)> {
        self.by_position.get(&position).copied()
    }

    /// Element symbol -> (letter, layer, record), first match in layer order.
    pub fn find_symbol(&self, symbol: &str) -> Option<(char, Layer, &ElementRecord)> {
        Layer::ALL.into_iter().find_map(|layer| {
            self.entries(layer)
                .find(|(_, r)| r.symbol.eq_ignore_ascii_case(symbol))
                .map(|(letter, r)| (letter, layer, r))
        })
    }

    /// `(letter, record)` pairs of one layer in alphabet order.
    pub fn entries(&self, layer: Layer) -> impl Iterator<Item = (char, &ElementRecord)> + '_ {
        self.alphabet
            .letters()
            .iter()
            .copied()
            .zip(self.layers[layer.index()].iter())
    }

    pub fn to_asset(&self) -> CatalogAsset {
        CatalogAsset {
            version: self.version.clone(),
            alphabet: self.alphabet.letters().iter().collect(),
            layers: Layer::ALL
                .into_iter()
                .map(|layer| {
                    self.entries(layer)
                        .map(|(letter, record)| AssetRecord {
                            letter,
                            record: record.clone(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

fn builtin_layer(raw: &[RawRecord]) -> Vec<ElementRecord> {
    raw.iter().map(|r| ElementRecord::from_raw(r).1).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

// --- Serialized form (data asset) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub letter: char,
    #[serde(flatten)]
    pub record: ElementRecord,
}

/// On-disk catalog: `{ version, alphabet, layers: [[record; N]; 3] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAsset {
    pub version: String,
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    pub layers: Vec<Vec<AssetRecord>>,
}

fn default_alphabet() -> String {
    TURKISH_ALPHABET.to_string()
}

impl TryFrom<CatalogAsset> for Catalog {
    type Error = CatalogError;

    fn try_from(asset: CatalogAsset) -> Result<Self, Self::Error> {
        let alphabet = Alphabet::new(&asset.alphabet)?;
        let count = asset.layers.len();
        let layers: [Vec<AssetRecord>; 3] = asset
            .layers
            .try_into()
            .map_err(|_| CatalogError::LayerCount(count))?;
        let layers: [Vec<(char, ElementRecord)>; 3] =
            layers.map(|l| l.into_iter().map(|a| (a.letter, a.record)).collect());
        Catalog::new(asset.version, alphabet, layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::PeriodicCipher;

    fn record(symbol: &str, row: u8, col: u8) -> ElementRecord {
        ElementRecord {
            symbol: symbol.to_string(),
            orbital: "1s1".to_string(),
            outer_shell_count: 1,
            position: Position::new(row, col),
        }
    }

    fn tiny_layers() -> [Vec<(char, ElementRecord)>; 3] {
        [
            vec![('X', record("H", 1, 1)), ('Y', record("He", 1, 18))],
            vec![('Y', record("Li", 2, 1)), ('X', record("Be", 1, 1))],
            vec![('X', record("B", 2, 13)), ('Y', record("C", 1, 18))],
        ]
    }

    #[test]
    fn test_builtin_is_complete() {
        let cat = Catalog::builtin();
        assert_eq!(cat.alphabet().len(), 29);
        for layer in Layer::ALL {
            assert_eq!(cat.entries(layer).count(), 29);
        }
        assert_eq!(cat.version(), BUILTIN_VERSION);
    }

    #[test]
    fn test_builtin_revalidates() {
        let asset = Catalog::builtin().to_asset();
        let rebuilt = Catalog::try_from(asset).expect("built-in catalog must validate");
        assert_eq!(rebuilt.to_asset(), Catalog::builtin().to_asset());
    }

    #[test]
    fn test_record_lookup() {
        let cat = Catalog::builtin();
        assert_eq!(cat.record('A', Layer::First).map(|r| r.symbol.as_str()), Some("H"));
        assert_eq!(cat.record('A', Layer::Second).map(|r| r.symbol.as_str()), Some("Zn"));
        assert_eq!(cat.record('Z', Layer::Third).map(|r| r.symbol.as_str()), Some("Fr"));
        assert!(cat.record('?', Layer::First).is_none());
    }

    #[test]
    fn test_locate_prefers_first_layer() {
        let cat = Catalog::builtin();
        let (layer, rec) = cat.locate('C').unwrap();
        assert_eq!(layer, Layer::First);
        assert_eq!(rec.position.to_coordinate(), "0201");
        assert!(cat.locate('w').is_none());
    }

    #[test]
    fn test_letter_at_every_builtin_position() {
        let cat = Catalog::builtin();
        for layer in Layer::ALL {
            for (letter, rec) in cat.entries(layer) {
                assert_eq!(cat.letter_at(rec.position), Some((layer, letter)));
            }
        }
        assert_eq!(cat.letter_at(Position::new(0, 0)), None);
        assert_eq!(cat.letter_at(Position::new(99, 99)), None);
    }

    #[test]
    fn test_reverse_index_first_match_wins() {
        let alphabet = Alphabet::new("XY").unwrap();
        let cat = Catalog::new("t", alphabet, tiny_layers()).unwrap();
        // (1,1) is X in layer 1 and X in layer 2
        assert_eq!(cat.letter_at(Position::new(1, 1)), Some((Layer::First, 'X')));
        // (1,18) is Y in layer 1 and Y in layer 3
        assert_eq!(cat.letter_at(Position::new(1, 18)), Some((Layer::First, 'Y')));
        assert_eq!(cat.letter_at(Position::new(2, 13)), Some((Layer::Third, 'X')));
        // Unordered input is stored in alphabet order
        assert_eq!(cat.record('X', Layer::Second).unwrap().symbol, "Be");
    }

    #[test]
    fn test_validation_errors() {
        let alphabet = Alphabet::new("XY").unwrap();

        let mut layers = tiny_layers();
        layers[1].pop();
        assert_eq!(
            Catalog::new("t", alphabet.clone(), layers).unwrap_err(),
            CatalogError::MissingRecord { layer: Layer::Second, letter: 'X' }
        );

        let mut layers = tiny_layers();
        layers[2].push(('Q', record("N", 2, 15)));
        assert_eq!(
            Catalog::new("t", alphabet.clone(), layers).unwrap_err(),
            CatalogError::UnknownLetter { layer: Layer::Third, letter: 'Q' }
        );

        let mut layers = tiny_layers();
        layers[0].push(('X', record("N", 2, 15)));
        assert_eq!(
            Catalog::new("t", alphabet, layers).unwrap_err(),
            CatalogError::DuplicateRecord { layer: Layer::First, letter: 'X' }
        );
    }

    #[test]
    fn test_positions_must_fit_coordinates() {
        let alphabet = Alphabet::new("XY").unwrap();

        let mut layers = tiny_layers();
        layers[0][0] = ('X', record("H", 100, 1));
        assert_eq!(
            Catalog::new("t", alphabet.clone(), layers).unwrap_err(),
            CatalogError::PositionOutOfRange {
                layer: Layer::First,
                letter: 'X',
                position: Position::new(100, 1),
            }
        );

        let mut layers = tiny_layers();
        layers[2][1] = ('Y', record("C", 1, 0));
        assert_eq!(
            Catalog::new("t", alphabet.clone(), layers).unwrap_err(),
            CatalogError::PositionOutOfRange {
                layer: Layer::Third,
                letter: 'Y',
                position: Position::new(1, 0),
            }
        );

        // Edges of the range still round-trip through the cipher
        let mut layers = tiny_layers();
        layers[0][0] = ('X', record("H", 99, 99));
        let cat = Catalog::new("t", alphabet, layers).unwrap();
        let cipher = PeriodicCipher::with_catalog(&cat);
        let enc = cipher.encrypt("YXY");
        assert_eq!(enc.result, "011899990118");
        assert_eq!(cipher.decrypt(&enc.result).result, "YXY");
    }

    #[test]
    fn test_asset_needs_three_layers() {
        let mut asset = Catalog::builtin().to_asset();
        asset.layers.pop();
        assert_eq!(Catalog::try_from(asset).unwrap_err(), CatalogError::LayerCount(2));
    }

    #[test]
    fn test_find_symbol() {
        let cat = Catalog::builtin();
        let (letter, layer, rec) = cat.find_symbol("Au").unwrap();
        assert_eq!((letter, layer), ('R', Layer::Third));
        assert_eq!(rec.position, Position::new(7, 7));
        assert_eq!(cat.find_symbol("fe").map(|(l, _, _)| l), Some('Ü'));
        assert!(cat.find_symbol("Uuo").is_none());
    }
}
