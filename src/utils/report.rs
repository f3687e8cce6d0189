// src/utils/report.rs

use crate::cipher::{AlternativeRecord, MatchRecord};
use crate::model::element_info;
use crate::model::{Catalog, Layer};

const RULE: &str = "--------------------------------------------------";

/// Letter -> element table for every layer
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Catalog: {} ({} letters)\n",
        catalog.version(),
        catalog.alphabet().len()
    ));

    for layer in Layer::ALL {
        out.push_str(&format!("\nLayer {}\n", layer));
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "{:<7} {:<8} {:<14} {:<6} {:<8}\n",
            "Letter", "Element", "Orbital", "Outer", "Position"
        ));
        out.push_str(RULE);
        out.push('\n');
        for (letter, rec) in catalog.entries(layer) {
            out.push_str(&format!(
                "{:<7} {:<8} {:<14} {:<6} {:<8}\n",
                letter,
                rec.symbol,
                rec.orbital,
                rec.outer_shell_count,
                rec.position.to_string()
            ));
        }
    }
    out
}

/// Encrypt side: one row per transformed letter
pub fn matches_table(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return "No letters were transformed.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<7} {:<6} {:<8} {:<14} {:<6} {:<6}\n",
        "Letter", "Layer", "Element", "Orbital", "Outer", "Shift"
    ));
    out.push_str(RULE);
    out.push('\n');
    for m in matches {
        out.push_str(&format!(
            "{:<7} {:<6} {:<8} {:<14} {:<6} {:<6}\n",
            m.letter, m.layer, m.element_symbol, m.orbital, m.outer_shell_count, m.shift
        ));
    }
    out
}

/// Decrypt side: every ambiguous coordinate with its candidates
pub fn alternatives_table(alternatives: &[AlternativeRecord]) -> String {
    if alternatives.is_empty() {
        return "No ambiguous coordinates.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<11} {:<14} {:<10} {:<8}\n",
        "Coordinate", "Candidates", "Layers", "Selected"
    ));
    out.push_str(RULE);
    out.push('\n');
    for alt in alternatives {
        let letters: Vec<String> = alt.candidates.iter().map(|c| c.letter.to_string()).collect();
        let layers: Vec<String> = alt.candidates.iter().map(|c| c.layer.to_string()).collect();
        out.push_str(&format!(
            "{:<11} {:<14} {:<10} {:<8}\n",
            alt.coordinate,
            letters.join(", "),
            layers.join(", "),
            alt.selected_letter
        ));
    }
    out
}

/// Element card: reference data when known, plus its place in the catalog
pub fn element_summary(catalog: &Catalog, symbol: &str) -> String {
    let info = element_info::lookup(symbol);
    let placed = catalog.find_symbol(symbol);

    if info.is_none() && placed.is_none() {
        return format!("No information about element {}.\n", symbol);
    }

    let mut out = String::new();
    if let Some(info) = &info {
        out.push_str(&format!("{} ({})\n", info.name, info.symbol));
        out.push_str(&format!("Atomic number: {}\n", info.atomic_number));
        if let Some(weight) = info.atomic_weight {
            out.push_str(&format!("Atomic weight: {}\n", weight));
        }
        out.push_str(&format!("Category: {}\n", info.category));
    }

    if let Some((letter, layer, rec)) = placed {
        out.push_str(&format!("Letter: {} (layer {})\n", letter, layer));
        out.push_str(&format!("Orbital: {}\n", rec.orbital));
        out.push_str(&format!("Outer shell electrons: {}\n", rec.outer_shell_count));
        out.push_str(&format!(
            "Table position: row {}, column {}\n",
            rec.position.row, rec.position.col
        ));
    }

    if let Some(info) = &info {
        if !info.uses.is_empty() {
            out.push_str("\nUses:\n");
            for u in info.uses {
                out.push_str(&format!("- {}\n", u));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::PeriodicCipher;

    #[test]
    fn test_catalog_table_lists_all_layers() {
        let text = catalog_table(Catalog::builtin());
        assert!(text.starts_with("Catalog: tr29-v1 (29 letters)"));
        assert!(text.contains("Layer 1") && text.contains("Layer 2") && text.contains("Layer 3"));
        // 3 layers x 29 rows
        let rows = text
            .lines()
            .skip(1)
            .filter(|l| l.trim_end().ends_with(')'))
            .count();
        assert_eq!(rows, 87);
    }

    #[test]
    fn test_matches_table() {
        let out = PeriodicCipher::new().encrypt("AB");
        let text = matches_table(&out.matches);
        let body: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(body.len(), 2);
        assert!(body[0].starts_with("A "));
        assert!(body[0].contains("H "));
        assert_eq!(matches_table(&[]), "No letters were transformed.\n");
    }

    #[test]
    fn test_alternatives_table() {
        let out = PeriodicCipher::new().decrypt("0407021704080404");
        let text = alternatives_table(&out.alternatives);
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with("0404"));
        assert!(row.contains("İ, D"));
        assert!(row.contains("1, 2"));
        assert_eq!(alternatives_table(&[]), "No ambiguous coordinates.\n");
    }

    #[test]
    fn test_element_summary() {
        let cat = Catalog::builtin();
        let iron = element_summary(cat, "Fe");
        assert!(iron.starts_with("Iron (Fe)"));
        assert!(iron.contains("Letter: Ü (layer 1)"));
        assert!(iron.contains("Table position: row 4, column 8"));
        assert!(iron.contains("Uses:"));

        let tin = element_summary(cat, "Sn");
        assert!(tin.contains("Letter: R (layer 2)"));
        assert!(!tin.contains("Uses:"));

        assert_eq!(element_summary(cat, "Qq"), "No information about element Qq.\n");
    }
}
