//! Hybridization marks.
//!
//! The mark is a coarse bookkeeping label derived only from incident bond
//! orders. It is what aromatization uses to decide which rings are candidates,
//! so it must be refreshed after any bond edit.

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::traits::HasBondOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    #[default]
    SP3,
    SP2,
    SP,
    Aromatic,
}

/// Mark for an atom with the given incident bond orders.
///
/// Any aromatic bond wins; otherwise a triple bond or two double bonds give
/// SP, one double bond gives SP2 and only single bonds give SP3.
pub fn hybridization_from_orders<I>(orders: I) -> Hybridization
where
    I: IntoIterator<Item = BondOrder>,
{
    let mut hyb = Hybridization::SP3;
    for order in orders {
        match order {
            BondOrder::Aromatic => return Hybridization::Aromatic,
            BondOrder::Triple => hyb = Hybridization::SP,
            BondOrder::Double => {
                hyb = match hyb {
                    Hybridization::SP3 => Hybridization::SP2,
                    _ => Hybridization::SP,
                }
            }
            BondOrder::Single => {}
        }
    }
    hyb
}

pub fn atom_hybridization<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> Hybridization
where
    B: HasBondOrder,
{
    hybridization_from_orders(mol.bonds_of(idx).map(|e| mol.bond(e).bond_order()))
}

pub fn assign_hybridization<A, B>(mol: &Mol<A, B>) -> Vec<Hybridization>
where
    B: HasBondOrder,
{
    mol.atoms().map(|idx| atom_hybridization(mol, idx)).collect()
}

/// Recompute and store the mark of every atom.
pub fn reset_hybridization(mol: &mut Mol<Atom, Bond>) {
    let marks = assign_hybridization(mol);
    for (idx, hyb) in marks.into_iter().enumerate() {
        mol.atom_mut(NodeIndex::new(idx)).hybridization = hyb;
    }
    mol.flush_cache();
}
