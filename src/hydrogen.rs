//! Implicit hydrogen counting.
//!
//! The count is the gap between the bond-order sum of an atom and the smallest
//! default valence of its element that accommodates it. Charges shift the
//! valence the isoelectronic way: boron anions and nitrogen-group cations gain
//! a bond (`[BH4-]`, `[NH4+]`), carbon loses one for either sign (`[CH3+]`,
//! `[CH3-]`), chalcogen and halogen anions lose one (`[OH-]`). A radical
//! removes one more.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasRadical};

/// Implicit hydrogens for an atom with the given incident bond orders.
///
/// Returns `None` when the count cannot be derived: aromatic bonds are still
/// present, the element has no valence model, or no valence fits.
pub fn implicit_hydrogens<I>(
    atomic_num: u8,
    formal_charge: i8,
    is_radical: bool,
    orders: I,
) -> Option<u8>
where
    I: IntoIterator<Item = BondOrder>,
{
    let mut used: i16 = 0;
    for order in orders {
        if order == BondOrder::Aromatic {
            return None;
        }
        used += order.valence_contribution() as i16;
    }

    let elem = Element::from_atomic_num(atomic_num)?;
    let charge = formal_charge as i16;
    let shift = match elem.outer_shell_electrons() {
        0..=3 => -charge,
        4 => -charge.abs(),
        _ => charge,
    };
    let radical = if is_radical { 1 } else { 0 };

    elem.default_valences()
        .iter()
        .map(|&v| v as i16 + shift - radical)
        .filter(|&v| v >= 0)
        .find(|&v| v >= used)
        .map(|v| (v - used) as u8)
}

pub fn atom_implicit_hydrogens<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> Option<u8>
where
    A: HasAtomicNum + HasFormalCharge + HasRadical,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    implicit_hydrogens(
        atom.atomic_num(),
        atom.formal_charge(),
        atom.is_radical(),
        mol.bonds_of(idx).map(|e| mol.bond(e).bond_order()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use BondOrder::*;

    #[test]
    fn methane() {
        assert_eq!(implicit_hydrogens(6, 0, false, []), Some(4));
    }

    #[test]
    fn kekule_ring_carbon() {
        assert_eq!(implicit_hydrogens(6, 0, false, [Single, Double]), Some(1));
        assert_eq!(implicit_hydrogens(6, 0, false, [Single, Single, Double]), Some(0));
    }

    #[test]
    fn aromatic_bonds_unknown() {
        assert_eq!(implicit_hydrogens(6, 0, false, [Aromatic, Aromatic]), None);
    }

    #[test]
    fn pyrrole_and_pyridine_nitrogen() {
        assert_eq!(implicit_hydrogens(7, 0, false, [Single, Single]), Some(1));
        assert_eq!(implicit_hydrogens(7, 0, false, [Single, Double]), Some(0));
    }

    #[test]
    fn charged_nitrogen() {
        assert_eq!(implicit_hydrogens(7, 1, false, []), Some(4));
        assert_eq!(implicit_hydrogens(7, 1, false, [Single, Single, Double]), Some(0));
        assert_eq!(implicit_hydrogens(7, -1, false, [Single, Single]), Some(0));
    }

    #[test]
    fn carbanion_and_cation() {
        assert_eq!(implicit_hydrogens(6, -1, false, [Single, Single]), Some(1));
        assert_eq!(implicit_hydrogens(6, 1, false, []), Some(3));
    }

    #[test]
    fn boron_anion() {
        assert_eq!(implicit_hydrogens(5, -1, false, []), Some(4));
        assert_eq!(implicit_hydrogens(5, 0, false, [Single, Single]), Some(1));
    }

    #[test]
    fn radical_removes_one() {
        assert_eq!(implicit_hydrogens(6, 0, true, []), Some(3));
    }

    #[test]
    fn hypervalent_sulfur_uses_next_valence() {
        assert_eq!(implicit_hydrogens(16, 0, false, [Double, Double]), Some(0));
        assert_eq!(implicit_hydrogens(16, 0, false, [Single, Double]), Some(1));
    }

    #[test]
    fn unknown_element() {
        assert_eq!(implicit_hydrogens(26, 0, false, [Single]), None);
    }
}
