pub mod aromatics;
pub mod atom;
pub mod bond;
pub mod element;
pub mod hybridization;
pub mod hydrogen;
pub mod mol;
pub mod rings;
pub mod traits;

pub use aromatics::{check_thiele, enumerate_kekule, kekulize, thiele, AromaticityError, KekuleForms};
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use element::Element;
pub use hybridization::{assign_hybridization, reset_hybridization, Hybridization};
pub use hydrogen::implicit_hydrogens;
pub use mol::Mol;
pub use rings::RingInfo;
pub use traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasHydrogenCount, HasRadical,
};

#[cfg(test)]
mod testing;
