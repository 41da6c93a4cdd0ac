//! Element data needed for valence bookkeeping.
//!
//! Covers the first four periods plus the heavier p-block elements that show
//! up in heteroaromatic rings (Sn, Sb, Te, I). Atomic numbers without an
//! entry are still valid atoms; they simply have no valence model.

/// Chemical elements known to the valence tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Fe = 26,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
}

const ALL: [Element; 33] = [
    Element::H,
    Element::He,
    Element::Li,
    Element::Be,
    Element::B,
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::Ne,
    Element::Na,
    Element::Mg,
    Element::Al,
    Element::Si,
    Element::P,
    Element::S,
    Element::Cl,
    Element::Ar,
    Element::K,
    Element::Ca,
    Element::Fe,
    Element::Cu,
    Element::Zn,
    Element::Ga,
    Element::Ge,
    Element::As,
    Element::Se,
    Element::Br,
    Element::Kr,
    Element::Sn,
    Element::Sb,
    Element::Te,
    Element::I,
];

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL.iter().copied().find(|e| e.atomic_num() == n)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::Be => "Be",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Fe => "Fe",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Ga => "Ga",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Kr => "Kr",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
        }
    }

    /// Electrons in the valence shell of the neutral atom.
    pub fn outer_shell_electrons(self) -> u8 {
        match self {
            Element::H | Element::Li | Element::Na | Element::K => 1,
            Element::He | Element::Be | Element::Mg | Element::Ca | Element::Zn => 2,
            Element::B | Element::Al | Element::Ga => 3,
            Element::C | Element::Si | Element::Ge | Element::Sn => 4,
            Element::N | Element::P | Element::As | Element::Sb => 5,
            Element::O | Element::S | Element::Se | Element::Te => 6,
            Element::F | Element::Cl | Element::Br | Element::I => 7,
            Element::Ne | Element::Ar | Element::Kr | Element::Fe => 8,
            Element::Cu => 11,
        }
    }

    pub fn default_valences(self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::F | Element::Cl | Element::Br => &[1],
            Element::Si | Element::Ge | Element::Sn => &[4],
            Element::P | Element::As | Element::Sb => &[3, 5],
            Element::S | Element::Se | Element::Te => &[2, 4, 6],
            Element::I => &[1, 3, 5, 7],
            _ => &[],
        }
    }
}

/// Element symbol for messages, falling back to `#<n>` for unknown numbers.
pub(crate) fn symbol_of(atomic_num: u8) -> String {
    match Element::from_atomic_num(atomic_num) {
        Some(e) => e.symbol().to_string(),
        None => format!("#{}", atomic_num),
    }
}
