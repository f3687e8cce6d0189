// src/cipher/decoder.rs

use crate::cipher::records::{
    AlternativeRecord, Candidate, Decryption, StepLog, StepObserver, UsageCounter,
};
use crate::cipher::shift::derive_shift;
use crate::model::{Catalog, Position, COORDINATE_WIDTH};
use log::{debug, warn};

/// Decryption state for one call. Counters never outlive the call.
struct Decoder<'c, 'o> {
    catalog: &'c Catalog,
    usage: UsageCounter,
    log: StepLog<'o>,
    result: String,
    alternatives: Vec<AlternativeRecord>,
}

/// Decrypts a mix of 4-digit coordinates and literal characters.
///
/// A coordinate does not say which letter or layer produced it, so each one
/// is resolved by searching every letter at the layer its next occurrence
/// would use, given the letters already recovered in this call.
pub(crate) fn decrypt(
    catalog: &Catalog,
    text: &str,
    observer: Option<&mut dyn StepObserver>,
) -> Decryption {
    let mut decoder = Decoder {
        catalog,
        usage: UsageCounter::default(),
        log: StepLog::new(observer),
        result: String::with_capacity(text.len()),
        alternatives: Vec::new(),
    };
    decoder.log.push(format!("Ciphertext: {}", text));

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match coordinate_at(&chars, i) {
            Some(token) => {
                decoder.resolve(&token);
                i += COORDINATE_WIDTH;
            }
            None => {
                let c = chars[i];
                decoder.result.push(c);
                decoder
                    .log
                    .push(format!("'{}' is not a coordinate, passed through.", c));
                i += 1;
            }
        }
        decoder.log.separator();
    }

    decoder.finish()
}

// Four ASCII digits starting at `i`, if that many characters remain.
fn coordinate_at(chars: &[char], i: usize) -> Option<String> {
    let window = chars.get(i..i + COORDINATE_WIDTH)?;
    window
        .iter()
        .all(|c| c.is_ascii_digit())
        .then(|| window.iter().collect())
}

/// Every letter that, on its next occurrence, would rotate onto `target`.
/// Letters are tried in alphabet order, each at the single layer its next
/// occurrence selects.
pub fn search_candidates(catalog: &Catalog, usage: &UsageCounter, target: char) -> Vec<Candidate> {
    let alphabet = catalog.alphabet();
    let mut found = Vec::new();

    for &letter in alphabet.letters() {
        let layer = usage.next_layer(letter);
        let Some(record) = catalog.record(letter, layer) else {
            continue;
        };
        let shift = derive_shift(&record.orbital, record.outer_shell_count);
        if alphabet.rotate_forward(letter, shift) == target {
            found.push(Candidate {
                letter,
                layer,
                element_symbol: record.symbol.clone(),
                orbital: record.orbital.clone(),
                outer_shell_count: record.outer_shell_count,
                shift,
            });
        }
    }

    found
}

impl Decoder<'_, '_> {
    fn resolve(&mut self, token: &str) {
        let position = match Position::from_coordinate(token) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping malformed coordinate {}: {}", token, e);
                self.log
                    .push(format!("Warning: cannot parse coordinate {}: {}", token, e));
                self.result.push_str(token);
                return;
            }
        };

        let Some((_, shifted)) = self.catalog.letter_at(position) else {
            warn!("No letter at table position {}", position);
            self.log.push(format!(
                "Warning: no letter found for coordinate {}.",
                token
            ));
            self.result.push_str(token);
            return;
        };
        self.log
            .push(format!("Coordinate {} -> shifted letter: {}", token, shifted));

        let mut candidates = search_candidates(self.catalog, &self.usage, shifted);
        if candidates.is_empty() {
            warn!("No candidate letter rotates onto '{}'", shifted);
            self.log.push(format!(
                "Warning: original letter not found, passing '{}' through.",
                shifted
            ));
            self.result.push(shifted);
            return;
        }

        // Stable: equal layers keep alphabet order.
        candidates.sort_by_key(|c| c.layer);
        let letter = candidates[0].letter;
        let layer = candidates[0].layer;

        if candidates.len() > 1 {
            let names: Vec<String> = candidates.iter().map(|c| c.letter.to_string()).collect();
            self.log
                .push(format!("Multiple candidates found: {}", names.join(", ")));
            self.alternatives.push(AlternativeRecord {
                coordinate: token.to_string(),
                candidates,
                selected_letter: letter,
            });
        }

        self.result.push(letter);
        let count = self.usage.increment(letter);
        debug!("{} -> {} -> {} (layer {})", token, shifted, letter, layer);
        self.log.push(format!(
            "Selected original letter: '{}' (occurrence {}, layer {})",
            letter, count, layer
        ));
    }

    fn finish(mut self) -> Decryption {
        self.log.push(format!("Result: {}", self.result));
        Decryption {
            result: self.result,
            steps: self.log.into_lines(),
            alternatives: self.alternatives,
        }
    }
}
