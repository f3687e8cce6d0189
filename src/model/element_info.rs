// src/model/element_info.rs

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    ReactiveNonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    PostTransitionMetal,
    TransitionMetal,
    Lanthanide,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::ReactiveNonmetal => "Reactive nonmetal",
            Category::NobleGas => "Noble gas",
            Category::AlkaliMetal => "Alkali metal",
            Category::AlkalineEarthMetal => "Alkaline earth metal",
            Category::Metalloid => "Metalloid",
            Category::PostTransitionMetal => "Post-transition metal",
            Category::TransitionMetal => "Transition metal",
            Category::Lanthanide => "Lanthanide",
        };
        f.pad(s)
    }
}

/// Reference card for one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    pub category: Category,
    /// Only known for the featured elements
    pub atomic_weight: Option<f64>,
    pub uses: &'static [&'static str],
}

use Category::*;

// Z = index + 1. Covers every symbol of the built-in catalog (H .. Fr).
const ELEMENTS: [(&str, &str, Category); 87] = [
    // --- Period 1 ---
    ("H", "Hydrogen", ReactiveNonmetal),
    ("He", "Helium", NobleGas),
    // --- Period 2 ---
    ("Li", "Lithium", AlkaliMetal),
    ("Be", "Beryllium", AlkalineEarthMetal),
    ("B", "Boron", Metalloid),
    ("C", "Carbon", ReactiveNonmetal),
    ("N", "Nitrogen", ReactiveNonmetal),
    ("O", "Oxygen", ReactiveNonmetal),
    ("F", "Fluorine", ReactiveNonmetal),
    ("Ne", "Neon", NobleGas),
    // --- Period 3 ---
    ("Na", "Sodium", AlkaliMetal),
    ("Mg", "Magnesium", AlkalineEarthMetal),
    ("Al", "Aluminium", PostTransitionMetal),
    ("Si", "Silicon", Metalloid),
    ("P", "Phosphorus", ReactiveNonmetal),
    ("S", "Sulfur", ReactiveNonmetal),
    ("Cl", "Chlorine", ReactiveNonmetal),
    ("Ar", "Argon", NobleGas),
    // --- Period 4 ---
    ("K", "Potassium", AlkaliMetal),
    ("Ca", "Calcium", AlkalineEarthMetal),
    ("Sc", "Scandium", TransitionMetal),
    ("Ti", "Titanium", TransitionMetal),
    ("V", "Vanadium", TransitionMetal),
    ("Cr", "Chromium", TransitionMetal),
    ("Mn", "Manganese", TransitionMetal),
    ("Fe", "Iron", TransitionMetal),
    ("Co", "Cobalt", TransitionMetal),
    ("Ni", "Nickel", TransitionMetal),
    ("Cu", "Copper", TransitionMetal),
    ("Zn", "Zinc", TransitionMetal),
    ("Ga", "Gallium", PostTransitionMetal),
    ("Ge", "Germanium", Metalloid),
    ("As", "Arsenic", Metalloid),
    ("Se", "Selenium", ReactiveNonmetal),
    ("Br", "Bromine", ReactiveNonmetal),
    ("Kr", "Krypton", NobleGas),
    // --- Period 5 ---
    ("Rb", "Rubidium", AlkaliMetal),
    ("Sr", "Strontium", AlkalineEarthMetal),
    ("Y", "Yttrium", TransitionMetal),
    ("Zr", "Zirconium", TransitionMetal),
    ("Nb", "Niobium", TransitionMetal),
    ("Mo", "Molybdenum", TransitionMetal),
    ("Tc", "Technetium", TransitionMetal),
    ("Ru", "Ruthenium", TransitionMetal),
    ("Rh", "Rhodium", TransitionMetal),
    ("Pd", "Palladium", TransitionMetal),
    ("Ag", "Silver", TransitionMetal),
    ("Cd", "Cadmium", TransitionMetal),
    ("In", "Indium", PostTransitionMetal),
    ("Sn", "Tin", PostTransitionMetal),
    ("Sb", "Antimony", Metalloid),
    ("Te", "Tellurium", Metalloid),
    ("I", "Iodine", ReactiveNonmetal),
    ("Xe", "Xenon", NobleGas),
    // --- Period 6 ---
    ("Cs", "Caesium", AlkaliMetal),
    ("Ba", "Barium", AlkalineEarthMetal),
    ("La", "Lanthanum", Lanthanide),
    ("Ce", "Cerium", Lanthanide),
    ("Pr", "Praseodymium", Lanthanide),
    ("Nd", "Neodymium", Lanthanide),
    ("Pm", "Promethium", Lanthanide),
    ("Sm", "Samarium", Lanthanide),
    ("Eu", "Europium", Lanthanide),
    ("Gd", "Gadolinium", Lanthanide),
    ("Tb", "Terbium", Lanthanide),
    ("Dy", "Dysprosium", Lanthanide),
    ("Ho", "Holmium", Lanthanide),
    ("Er", "Erbium", Lanthanide),
    ("Tm", "Thulium", Lanthanide),
    ("Yb", "Ytterbium", Lanthanide),
    ("Lu", "Lutetium", Lanthanide),
    ("Hf", "Hafnium", TransitionMetal),
    ("Ta", "Tantalum", TransitionMetal),
    ("W", "Tungsten", TransitionMetal),
    ("Re", "Rhenium", TransitionMetal),
    ("Os", "Osmium", TransitionMetal),
    ("Ir", "Iridium", TransitionMetal),
    ("Pt", "Platinum", TransitionMetal),
    ("Au", "Gold", TransitionMetal),
    ("Hg", "Mercury", TransitionMetal),
    ("Tl", "Thallium", PostTransitionMetal),
    ("Pb", "Lead", PostTransitionMetal),
    ("Bi", "Bismuth", PostTransitionMetal),
    ("Po", "Polonium", PostTransitionMetal),
    ("At", "Astatine", Metalloid),
    ("Rn", "Radon", NobleGas),
    // --- Period 7 ---
    ("Fr", "Francium", AlkaliMetal),
];

// (symbol, atomic weight, typical uses)
const FEATURED: [(&str, f64, &[&str]); 9] = [
    ("H", 1.008, &[
        "Rocket fuel for space launches.",
        "Energy source in fuel cells.",
        "Hydrogenation in industrial chemistry.",
        "Researched as a future clean energy carrier.",
    ]),
    ("He", 4.0026, &[
        "Lifting gas for balloons and airships.",
        "Coolant for superconducting magnets in MRI machines.",
        "Breathing mixtures for deep-sea divers.",
    ]),
    ("Li", 6.94, &[
        "Rechargeable batteries.",
        "Medication for bipolar disorder.",
        "Ceramics and glass production.",
        "High-performance alloys.",
    ]),
    ("Be", 9.0122, &[
        "Aircraft and spacecraft parts.",
        "X-ray tube windows.",
        "Neutron reflector in nuclear reactors.",
        "Electronic components.",
    ]),
    ("C", 12.011, &[
        "Steel and other alloys.",
        "Graphite in pencils, diamond in jewellery.",
        "3D printing materials.",
        "Carbon fibre for sports gear, cars and aircraft.",
    ]),
    ("O", 16.00, &[
        "Respiratory support in medicine.",
        "Metal production, cutting and welding.",
        "Rocket propellant oxidiser.",
        "Water treatment.",
    ]),
    ("Na", 22.99, &[
        "Table salt (NaCl).",
        "Sodium-vapour street lamps.",
        "Soap making.",
        "Coolant in nuclear reactors.",
    ]),
    ("Fe", 55.85, &[
        "Main component of steel.",
        "Construction, cars and machinery.",
        "Oxygen transport in blood.",
        "Electric motors and transformers.",
    ]),
    ("Au", 196.97, &[
        "Jewellery.",
        "Conductor in electronic circuits.",
        "Currency reserves.",
        "Dental fillings.",
    ]),
];

fn index_of(symbol: &str) -> Option<usize> {
    ELEMENTS.iter().position(|(s, _, _)| s.eq_ignore_ascii_case(symbol))
}

/// Returns the atomic number (Z) for a symbol of the catalog range.
pub fn atomic_number(symbol: &str) -> Option<u32> {
    index_of(symbol).map(|i| i as u32 + 1)
}

pub fn lookup(symbol: &str) -> Option<ElementInfo> {
    let index = index_of(symbol)?;
    let (symbol, name, category) = ELEMENTS[index];
    let featured = FEATURED.iter().find(|(s, _, _)| *s == symbol);

    Some(ElementInfo {
        symbol,
        name,
        atomic_number: index as u32 + 1,
        category,
        atomic_weight: featured.map(|f| f.1),
        uses: featured.map(|f| f.2).unwrap_or(&[]),
    })
}
