//! Molecule builders shared by the unit tests.

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::hybridization::reset_hybridization;
use crate::mol::Mol;

pub fn n(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

/// Atoms as `(atomic_num, formal_charge, hydrogen_count)`, bonds as
/// `(a, b, order)`. Hybridization marks are derived from the bonds.
pub fn build(atoms: &[(u8, i8, u8)], bonds: &[(usize, usize, BondOrder)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for &(atomic_num, formal_charge, hydrogen_count) in atoms {
        mol.add_atom(Atom {
            atomic_num,
            formal_charge,
            hydrogen_count,
            ..Atom::default()
        });
    }
    for &(a, b, order) in bonds {
        mol.add_bond(n(a), n(b), Bond::new(order));
    }
    reset_hybridization(&mut mol);
    mol
}

/// Monocycle `0-1-...-(k-1)-0` with every bond of the same order. Ring
/// carbons carry one hydrogen, heteroatoms none.
pub fn ring_of(atoms: &[u8], order: BondOrder) -> Mol<Atom, Bond> {
    let props: Vec<_> = atoms
        .iter()
        .map(|&z| (z, 0, u8::from(z == 6)))
        .collect();
    let bonds: Vec<_> = (0..atoms.len())
        .map(|i| (i, (i + 1) % atoms.len(), order))
        .collect();
    build(&props, &bonds)
}

/// Benzene as atoms 0-5. `Aromatic` and `Single` fill every ring bond with
/// that order; any other order gives the Kekulé form `0=1, 2=3, 4=5`.
pub fn benzene(order: BondOrder) -> Mol<Atom, Bond> {
    let bonds: Vec<_> = (0..6)
        .map(|i| (i, (i + 1) % 6, alternate(order, i)))
        .collect();
    build(&[(6, 0, 1); 6], &bonds)
}

/// Naphthalene with fusion atoms 3 and 8:
/// rings `0-1-2-3-8-9` and `3-4-5-6-7-8`.
pub fn naphthalene(order: BondOrder) -> Mol<Atom, Bond> {
    let edges = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 8),
        (8, 3),
        (8, 9),
        (9, 0),
    ];
    let kekule = [0, 2, 4, 6, 9];
    let bonds: Vec<_> = edges
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| {
            let o = match order {
                BondOrder::Aromatic | BondOrder::Single => order,
                _ if kekule.contains(&i) => BondOrder::Double,
                _ => BondOrder::Single,
            };
            (a, b, o)
        })
        .collect();
    let atoms: Vec<_> = (0..10)
        .map(|i| (6, 0, if i == 3 || i == 8 { 0 } else { 1 }))
        .collect();
    build(&atoms, &bonds)
}

fn alternate(order: BondOrder, i: usize) -> BondOrder {
    match order {
        BondOrder::Aromatic | BondOrder::Single => order,
        _ if i % 2 == 0 => BondOrder::Double,
        _ => BondOrder::Single,
    }
}
