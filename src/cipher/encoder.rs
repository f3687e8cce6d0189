// src/cipher/encoder.rs

use crate::cipher::records::{Encryption, MatchRecord, StepLog, StepObserver, UsageCounter};
use crate::cipher::shift::derive_shift;
use crate::model::{Catalog, Layer};
use log::{debug, warn};

/// Encrypts `text` letter by letter.
///
/// Input is upper-cased first. Each alphabet letter picks its layer from how
/// many times it has occurred so far, is rotated by its element's shift, and
/// is written as the 4-digit coordinate of the rotated letter. Foreign
/// characters pass through untouched.
pub(crate) fn encrypt(
    catalog: &Catalog,
    text: &str,
    observer: Option<&mut dyn StepObserver>,
) -> Encryption {
    let text = text.to_uppercase();
    let alphabet = catalog.alphabet();

    let mut log = StepLog::new(observer);
    let mut usage = UsageCounter::default();
    let mut matches = Vec::new();
    let mut result = String::with_capacity(text.len() * 4);

    log.push(format!("Input text: {}", text));

    for letter in text.chars() {
        if !alphabet.contains(letter) {
            result.push(letter);
            log.push(format!("'{}' is not in the alphabet, left unchanged.", letter));
            continue;
        }

        let count = usage.increment(letter);
        let layer = Layer::for_occurrence(count);
        log.push(format!("Occurrence {} of '{}' (layer {}):", count, letter, layer));

        let Some(record) = catalog.record(letter, layer) else {
            warn!("No element for '{}' in layer {}", letter, layer);
            result.push(letter);
            log.push("Element not found, letter left unchanged.");
            continue;
        };

        log.push(format!("Matched element: {}", record.symbol));
        log.push(format!("Orbital notation: {}", record.orbital));

        let shift = derive_shift(&record.orbital, record.outer_shell_count);
        log.push(format!("Computed shift: {}", shift));

        let shifted = alphabet.rotate_forward(letter, shift);
        log.push(format!("Shifted letter: {}", shifted));

        match catalog.locate(shifted) {
            Some((found_layer, found)) => {
                let coord = found.position.to_coordinate();
                debug!("{} -> {} -> {}", letter, shifted, coord);
                result.push_str(&coord);
                log.push(format!("Table coordinate (layer {}): {}", found_layer, coord));
            }
            None => {
                warn!("No table position for shifted letter '{}'", shifted);
                result.push(shifted);
                log.push(format!(
                    "Coordinate not found, using shifted letter: {}",
                    shifted
                ));
            }
        }

        matches.push(MatchRecord {
            letter,
            layer,
            element_symbol: record.symbol.clone(),
            orbital: record.orbital.clone(),
            outer_shell_count: record.outer_shell_count,
            shift,
        });

        log.separator();
    }

    log.push(format!("Result: {}", result));

    Encryption {
        result,
        steps: log.into_lines(),
        matches,
    }
}
