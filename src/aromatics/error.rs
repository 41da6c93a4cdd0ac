use std::fmt;

use petgraph::graph::NodeIndex;

use crate::element::symbol_of;

/// Error raised when a ring system cannot be a valid aromatic system.
///
/// Every variant is an "invalid aromatic ring" condition; they differ only in
/// the rule that was violated. Conversions fail before touching the molecule,
/// so a returned error always leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AromaticityError {
    /// A triple bond is attached to an atom of the aromatic skeleton.
    TripleBondInRing { atom: NodeIndex },
    /// A skeleton atom has fewer than 2 or more than 3 aromatic ring bonds.
    InvalidRingDegree { atom: NodeIndex, degree: usize },
    /// An atom with an exocyclic double bond sits at a ring fusion.
    QuinoneValence { atom: NodeIndex },
    /// An atom with an exocyclic double bond is charged or of the wrong element.
    InvalidQuinone { atom: NodeIndex, atomic_num: u8 },
    /// Only B, C, N, O, P, S, Se and Te may form aromatic rings.
    UnsupportedElement { atom: NodeIndex, atomic_num: u8 },
    /// Charge, radical, bond count and hydrogens do not fit the element's rules.
    InvalidValence {
        atom: NodeIndex,
        atomic_num: u8,
        reason: &'static str,
    },
    /// The search exhausted every alternation without finding a Kekulé form.
    NoKekuleForm { atoms: Vec<NodeIndex> },
}

impl fmt::Display for AromaticityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid aromatic ring: ")?;
        match self {
            Self::TripleBondInRing { atom } => {
                write!(f, "triple bond connected to ring atom {}", atom.index())
            }
            Self::InvalidRingDegree { atom, degree } => write!(
                f,
                "atom {} has {} aromatic ring bonds (not in ring aromatic bond or hypercondensed rings)",
                atom.index(),
                degree
            ),
            Self::QuinoneValence { atom } => {
                write!(f, "quinone valence error at atom {}", atom.index())
            }
            Self::InvalidQuinone { atom, atomic_num } => write!(
                f,
                "quinone atom {} ({}) should be neutral C, P, S, Se or Te",
                atom.index(),
                symbol_of(*atomic_num)
            ),
            Self::UnsupportedElement { atom, atomic_num } => write!(
                f,
                "only B, C, N, P, O, S, Se, Te possible, not: {} (atom {})",
                symbol_of(*atomic_num),
                atom.index()
            ),
            Self::InvalidValence {
                atom,
                atomic_num,
                reason,
            } => write!(
                f,
                "atom {} ({}): {}",
                atom.index(),
                symbol_of(*atomic_num),
                reason
            ),
            Self::NoKekuleForm { atoms } => {
                write!(f, "kekule form not found for atoms [")?;
                for (i, idx) in atoms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", idx.index())?;
                }
                write!(f, "]")
            }
        }
    }
}

impl std::error::Error for AromaticityError {}
