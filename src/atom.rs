use crate::hybridization::Hybridization;

/// Atom type for a molecular graph node.
///
/// Besides the intrinsic properties read off a structural formula, an atom
/// carries its hybridization mark. The mark is derived from the incident bond
/// orders and is refreshed by [`reset_hybridization`](crate::reset_hybridization)
/// or by the aromaticity conversions whenever they rewrite bonds.
///
/// # Examples
///
/// ```
/// use kekule::{Atom, Hybridization};
///
/// let pyrrole_n = Atom {
///     atomic_num: 7,
///     hydrogen_count: 1,
///     ..Atom::default()
/// };
/// assert_eq!(pyrrole_n.hybridization, Hybridization::SP3);
/// assert!(!pyrrole_n.is_radical);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …).
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Whether the atom carries an unpaired electron.
    pub is_radical: bool,
    /// Number of suppressed hydrogens on this atom.
    ///
    /// These are not graph nodes. Kekulization recomputes the count for
    /// every ring atom it touches.
    pub hydrogen_count: u8,
    pub hybridization: Hybridization,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasRadical for Atom {
    fn is_radical(&self) -> bool {
        self.is_radical
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Hybridization {
        self.hybridization
    }
}
