//! Thiele aromatization: rewrite alternating ring systems to aromatic bonds.

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::skeleton::Skeleton;
use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::hybridization::Hybridization;
use crate::mol::Mol;
use crate::rings::{ring_edges, RingInfo};

/// Elements allowed in a ring that is rewritten to aromatic form.
const THIELE_ELEMENTS: [u8; 4] = [5, 6, 7, 15];

fn candidate_skeleton(mol: &Mol<Atom, Bond>) -> Skeleton {
    let mut skeleton = Skeleton::default();
    for ring in mol.sssr().rings() {
        let conjugated = ring.iter().all(|&idx| {
            let a = mol.atom(idx);
            a.hybridization == Hybridization::SP2 && THIELE_ELEMENTS.contains(&a.atomic_num)
        });
        if conjugated {
            skeleton.add_ring(ring);
        }
    }
    skeleton
}

/// Skeleton atoms whose double bond points out of the skeleton.
fn quinones(mol: &Mol<Atom, Bond>, skeleton: &Skeleton) -> Vec<NodeIndex> {
    skeleton
        .atoms()
        .filter(|&atom| {
            mol.bonded(atom)
                .any(|(m, b)| b.order == BondOrder::Double && !skeleton.contains(m))
        })
        .collect()
}

/// Remove quinone atoms, then peel dangling chains pairwise: an atom left
/// with one ring neighbor goes together with that neighbor, whose double bond
/// now has nowhere to go inside the ring.
fn strip_quinones(mol: &Mol<Atom, Bond>, skeleton: &mut Skeleton) {
    for atom in quinones(mol, skeleton) {
        skeleton.remove_atom(atom);
    }
    loop {
        let dangling = skeleton.atoms().find(|&a| skeleton.degree(a) == 1);
        let Some(atom) = dangling else {
            break;
        };
        for m in skeleton.remove_atom(atom) {
            skeleton.remove_atom(m);
        }
    }
    let isolated: Vec<_> = skeleton.atoms().filter(|&a| skeleton.degree(a) == 0).collect();
    for atom in isolated {
        skeleton.remove_atom(atom);
    }
}

fn aromatic_rings(mol: &Mol<Atom, Bond>) -> Option<RingInfo> {
    let mut skeleton = candidate_skeleton(mol);
    if skeleton.is_empty() {
        return None;
    }
    strip_quinones(mol, &mut skeleton);
    if skeleton.is_empty() {
        return None;
    }
    let num_rings = skeleton.cyclomatic_number();
    if num_rings == 0 {
        return None;
    }
    Some(RingInfo::sssr_of(skeleton.adjacency(), num_rings))
}

/// Convert conjugated SP2 rings of B, C, N and P to aromatic form.
///
/// Rings that only close through a quinone-like exocyclic double bond are
/// left alone. Returns `true` if at least one ring was rewritten.
pub fn thiele(mol: &mut Mol<Atom, Bond>) -> bool {
    let Some(rings) = aromatic_rings(mol) else {
        debug!("thiele: no conjugated rings");
        return false;
    };

    for ring in rings.rings() {
        for (a, b) in ring_edges(ring) {
            if let Some(e) = mol.bond_between(a, b) {
                mol.bond_mut(e).order = BondOrder::Aromatic;
            }
        }
        for &atom in ring {
            mol.atom_mut(atom).hybridization = Hybridization::Aromatic;
        }
    }
    mol.flush_cache();
    let dropped = mol.fix_stereo();
    debug!(rings = rings.num_rings(), dropped_stereo = dropped, "thiele: aromatized");
    true
}
