//! Writing a Kekulé assignment back into a molecule.

use std::collections::BTreeSet;

use super::search::KekuleBond;
use crate::atom::Atom;
use crate::bond::Bond;
use crate::hybridization::atom_hybridization;
use crate::hydrogen::atom_implicit_hydrogens;
use crate::mol::Mol;

/// Write an assignment into `mol` and refresh the atoms it touches.
///
/// Hybridization marks and implicit hydrogen counts are recomputed from the
/// new bond orders; an atom whose hydrogen count cannot be derived keeps its
/// previous one.
pub fn apply(mol: &mut Mol<Atom, Bond>, assignment: &[KekuleBond]) {
    let mut touched = BTreeSet::new();
    for kb in assignment {
        if let Some(e) = mol.bond_between(kb.atom, kb.neighbor) {
            mol.bond_mut(e).order = kb.order;
            touched.insert(kb.atom);
            touched.insert(kb.neighbor);
        }
    }

    for atom in touched {
        let hybridization = atom_hybridization(mol, atom);
        let hydrogens = atom_implicit_hydrogens(mol, atom);
        let a = mol.atom_mut(atom);
        a.hybridization = hybridization;
        if let Some(h) = hydrogens {
            a.hydrogen_count = h;
        }
    }
    mol.flush_cache();
}
