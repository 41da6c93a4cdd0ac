//! Valence classification of aromatic skeleton atoms.
//!
//! Each skeleton atom ends up in one of three roles that drive the search:
//!
//! - *double-bonded*: the atom's π contribution is already fixed, either by
//!   an exocyclic double bond (quinone) or by a lone pair (pyrrole NH, furan
//!   O, thiophene S). All of its ring bonds are single.
//! - *pyrrole-like*: the atom may either donate a lone pair (all ring bonds
//!   single) or take one ring double bond.
//! - plain: the atom takes exactly one ring double bond.

use std::collections::BTreeSet;

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::error::AromaticityError;
use super::skeleton::Skeleton;
use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::Element::{self, B, C, N, O, P, S, Se, Te};
use crate::mol::Mol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Plain,
    DoubleBonded,
    Pyrrole,
}

/// Everything the decision table looks at for one atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomContext {
    pub atomic_num: u8,
    pub charge: i8,
    pub radical: bool,
    /// Bonds to the atom in the whole molecule, not only in the skeleton.
    pub bonds: usize,
    pub hydrogens: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Element,
    Rule(&'static str),
}

/// Role sets over the skeleton; disjoint, double-bonded takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roles {
    pub double_bonded: BTreeSet<NodeIndex>,
    pub pyrroles: BTreeSet<NodeIndex>,
}

impl Roles {
    /// Roles of the atoms of one component.
    pub fn restrict(&self, component: &Skeleton) -> Roles {
        Roles {
            double_bonded: component
                .atoms()
                .filter(|a| self.double_bonded.contains(a))
                .collect(),
            pyrroles: component
                .atoms()
                .filter(|a| self.pyrroles.contains(a))
                .collect(),
        }
    }
}

/// Role of a skeleton atom that carries no exocyclic double bond.
pub fn atom_role(ctx: AtomContext) -> Result<Role, Rejection> {
    use Rejection::Rule;
    use Role::*;

    let elem = Element::from_atomic_num(ctx.atomic_num);
    match (elem, ctx.charge, ctx.radical, ctx.bonds, ctx.hydrogens) {
        (Some(C), 0, _, 2 | 3, _) => Ok(Plain),
        (Some(C), 0, ..) => Err(Rule("neutral carbon needs 2 or 3 bonds")),
        (Some(C), -1 | 1, true, 2, _) => Ok(DoubleBonded),
        (Some(C), -1 | 1, true, ..) => Err(Rule("carbon ion-radical needs 2 bonds")),
        (Some(C), -1 | 1, false, 3, _) => Ok(DoubleBonded),
        (Some(C), -1 | 1, false, 2, _) => Ok(Pyrrole),
        (Some(C), -1 | 1, ..) => Err(Rule("charged carbon needs 2 or 3 bonds")),
        (Some(C), ..) => Err(Rule("carbon charge must be -1, 0 or +1")),

        (Some(N | P), 0, true, 2, _) => Ok(DoubleBonded),
        (Some(N | P), 0, true, ..) => Err(Rule("neutral radical needs 2 bonds")),
        (Some(N), 0, false, 3, _) => Ok(DoubleBonded),
        (Some(P), 0, false, 3, _) => Ok(Pyrrole),
        (Some(N | P), 0, false, 2, 0) => Ok(Pyrrole),
        (Some(N | P), 0, false, 2, 1) => Ok(DoubleBonded),
        (Some(N | P), 0, false, 2, _) => Err(Rule("pyrrole-like atom with more than one hydrogen")),
        (Some(P), 0, false, 4, _) => Ok(Plain),
        (Some(N | P), 0, ..) => Err(Rule("neutral atom needs 2 or 3 bonds")),
        (Some(N | P), -1, false, 2, _) => Ok(DoubleBonded),
        (Some(N | P), -1, ..) => Err(Rule("anion must be a non-radical with 2 bonds")),
        (Some(N | P), 1, true, 2, _) => Ok(Plain),
        (Some(N | P), 1, true, ..) => Err(Rule("cation-radical needs 2 bonds")),
        (Some(N | P), 1, false, 2, _) => Ok(Pyrrole),
        (Some(N | P), 1, false, 3, _) => Ok(Plain),
        (Some(N | P), 1, ..) => Err(Rule("cation needs 2 or 3 bonds")),
        (Some(N | P), ..) => Err(Rule("charge must be -1, 0 or +1")),

        (Some(O), 0, false, 2, _) | (Some(O), 1, true, 2, _) => Ok(DoubleBonded),
        (Some(O), ..) => Err(Rule("furan oxygen must be neutral or a cation-radical with 2 bonds")),

        (Some(S | Se | Te), _, _, bonds, _) if bonds != 2 => Err(Rule("S, Se, Te hypervalent ring")),
        (Some(S | Se | Te), 1, true, ..) => Ok(DoubleBonded),
        (Some(S | Se | Te), _, true, ..) => Err(Rule("S, Se, Te cation-radical expected")),
        (Some(S | Se | Te), 0, false, ..) => Ok(DoubleBonded),
        (Some(S | Se | Te), 1, false, ..) => Ok(Plain),
        (Some(S | Se | Te), ..) => Err(Rule("S, Se, Te cation in benzene like ring expected")),

        (Some(B), 0, true, 2, _) => Ok(DoubleBonded),
        (Some(B), 0, false, 2, _) => Ok(Pyrrole),
        (Some(B), 0, false, ..) => Ok(DoubleBonded),
        (Some(B), 0, true, ..) => Err(Rule("neutral boron radical needs 2 bonds")),
        (Some(B), 1, false, 2, _) => Ok(DoubleBonded),
        (Some(B), 1, ..) => Err(Rule("boron cation must be a non-radical with 2 bonds")),
        (Some(B), -1, false, 2, _) => Ok(Pyrrole),
        (Some(B), -1, true, 2, _) => Ok(Plain),
        (Some(B), -1, true, ..) => Ok(DoubleBonded),
        (Some(B), -1, false, ..) => Ok(Pyrrole),
        (Some(B), ..) => Err(Rule("boron charge must be -1, 0 or +1")),

        _ => Err(Rejection::Element),
    }
}

fn context(mol: &Mol<Atom, Bond>, atom: NodeIndex) -> AtomContext {
    let a = mol.atom(atom);
    AtomContext {
        atomic_num: a.atomic_num,
        charge: a.formal_charge,
        radical: a.is_radical,
        bonds: mol.bonds_of(atom).count(),
        hydrogens: a.hydrogen_count,
    }
}

fn has_bond_of(mol: &Mol<Atom, Bond>, atom: NodeIndex, order: BondOrder) -> bool {
    mol.bonds_of(atom).any(|e| mol.bond(e).order == order)
}

/// Validate the skeleton and assign roles to its atoms.
///
/// Checks run as whole-skeleton passes in a fixed order (triple bonds, ring
/// degrees, quinones, per-element rules), each reporting the lowest offending
/// atom.
pub fn classify(mol: &Mol<Atom, Bond>, skeleton: &Skeleton) -> Result<Roles, AromaticityError> {
    let mut roles = Roles::default();
    if skeleton.is_empty() {
        return Ok(roles);
    }

    if let Some(atom) = skeleton
        .atoms()
        .find(|&a| has_bond_of(mol, a, BondOrder::Triple))
    {
        return Err(AromaticityError::TripleBondInRing { atom });
    }

    if let Some(atom) = skeleton
        .atoms()
        .find(|&a| !matches!(skeleton.degree(a), 2 | 3))
    {
        return Err(AromaticityError::InvalidRingDegree {
            atom,
            degree: skeleton.degree(atom),
        });
    }

    let quinones: BTreeSet<NodeIndex> = skeleton
        .atoms()
        .filter(|&a| has_bond_of(mol, a, BondOrder::Double))
        .collect();
    if let Some(&atom) = quinones.iter().find(|&&a| skeleton.degree(a) != 2) {
        return Err(AromaticityError::QuinoneValence { atom });
    }
    for &atom in &quinones {
        let a = mol.atom(atom);
        let allowed = matches!(
            Element::from_atomic_num(a.atomic_num),
            Some(C | P | S | Se | Te)
        );
        if !allowed || a.formal_charge != 0 {
            return Err(AromaticityError::InvalidQuinone {
                atom,
                atomic_num: a.atomic_num,
            });
        }
    }

    for atom in skeleton.atoms() {
        let ctx = context(mol, atom);
        let quinone = quinones.contains(&atom);
        if quinone && matches!(Element::from_atomic_num(ctx.atomic_num), Some(S | Se | Te)) {
            continue;
        }
        let role = atom_role(ctx).map_err(|rejection| match rejection {
            Rejection::Element => AromaticityError::UnsupportedElement {
                atom,
                atomic_num: ctx.atomic_num,
            },
            Rejection::Rule(reason) => AromaticityError::InvalidValence {
                atom,
                atomic_num: ctx.atomic_num,
                reason,
            },
        })?;
        match role {
            Role::DoubleBonded => {
                roles.double_bonded.insert(atom);
            }
            Role::Pyrrole if !quinone => {
                roles.pyrroles.insert(atom);
            }
            _ => {}
        }
    }
    roles.double_bonded.extend(quinones);

    debug!(
        atoms = skeleton.len(),
        double_bonded = roles.double_bonded.len(),
        pyrroles = roles.pyrroles.len(),
        "classified aromatic skeleton"
    );
    Ok(roles)
}
