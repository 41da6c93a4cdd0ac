//! Conversion between aromatic and Kekulé bond representations.
//!
//! [`kekulize`] replaces aromatic bonds with an alternating single/double
//! pattern that respects the valence rules of every ring atom (pyrrole-like
//! nitrogens, furan oxygens, quinone carbons and so on). [`enumerate_kekule`]
//! lists every such pattern. [`thiele`] goes the other way and marks
//! conjugated rings as aromatic.
//!
//! Validation happens before any bond is touched: a returned
//! [`AromaticityError`] always leaves the molecule as it was.

mod classify;
mod error;
mod patch;
mod product;
mod search;
mod skeleton;
mod thiele;

use tracing::debug;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;

pub use error::AromaticityError;
pub use thiele::thiele;

use classify::classify;
use product::KekuleProduct;
use search::KekuleSearch;
use skeleton::Skeleton;

/// Validate the aromatic skeleton and set up one search per component.
fn prepare(mol: &Mol<Atom, Bond>) -> Result<KekuleProduct, AromaticityError> {
    let skeleton = Skeleton::from_aromatic_bonds(mol);
    let roles = classify(mol, &skeleton)?;
    let searches: Vec<_> = skeleton
        .components()
        .into_iter()
        .map(|component| {
            let component_roles = roles.restrict(&component);
            KekuleSearch::new(component, component_roles)
        })
        .collect();
    debug!(components = searches.len(), "kekule search prepared");
    Ok(KekuleProduct::new(searches))
}

/// Replace aromatic bonds with one Kekulé form.
///
/// Returns `Ok(true)` if aromatic bonds were rewritten and `Ok(false)` if the
/// molecule had none. Touched atoms get fresh hybridization marks and implicit
/// hydrogen counts.
///
/// # Errors
///
/// Returns an [`AromaticityError`] if a ring cannot be aromatic or no
/// alternation exists. The molecule is left unchanged.
pub fn kekulize(mol: &mut Mol<Atom, Bond>) -> Result<bool, AromaticityError> {
    let Some(first) = prepare(mol)?.next() else {
        return Ok(false);
    };
    let assignment = first?;
    if assignment.is_empty() {
        return Ok(false);
    }
    patch::apply(mol, &assignment);
    debug!(bonds = assignment.len(), "kekulized");
    Ok(true)
}

/// Lazily enumerate every Kekulé form of `mol` as a patched copy.
///
/// Skeleton and valence errors are reported up front; a component without
/// any alternation shows up as a single `Err` item. A molecule without
/// aromatic bonds yields one unchanged copy.
pub fn enumerate_kekule(mol: &Mol<Atom, Bond>) -> Result<KekuleForms<'_>, AromaticityError> {
    Ok(KekuleForms {
        mol,
        product: prepare(mol)?,
    })
}

/// Check that `mol` could be kekulized.
///
/// With `fast` only the skeleton and valence rules are checked; otherwise a
/// Kekulé form must actually exist.
pub fn check_thiele(mol: &Mol<Atom, Bond>, fast: bool) -> bool {
    match prepare(mol) {
        Ok(_) if fast => true,
        Ok(mut product) => matches!(product.next(), Some(Ok(_))),
        Err(_) => false,
    }
}

/// Iterator returned by [`enumerate_kekule`].
#[derive(Debug)]
pub struct KekuleForms<'a> {
    mol: &'a Mol<Atom, Bond>,
    product: KekuleProduct,
}

impl Iterator for KekuleForms<'_> {
    type Item = Result<Mol<Atom, Bond>, AromaticityError>;

    fn next(&mut self) -> Option<Self::Item> {
        let assignment = match self.product.next()? {
            Ok(assignment) => assignment,
            Err(e) => return Some(Err(e)),
        };
        let mut form = self.mol.clone();
        patch::apply(&mut form, &assignment);
        Some(Ok(form))
    }
}
