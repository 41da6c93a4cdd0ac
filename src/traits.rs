use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasRadical {
    fn is_radical(&self) -> bool;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Hybridization;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
