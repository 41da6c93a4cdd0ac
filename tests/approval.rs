use kekule::{
    check_thiele, enumerate_kekule, kekulize, reset_hybridization, thiele, Atom, AromaticityError,
    Bond, BondOrder, Mol,
};
use petgraph::graph::NodeIndex;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Expected {
    forms: Option<usize>,
    double_bonds: Option<usize>,
    thiele_aromatic_bonds: Option<usize>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct MolEntry {
    name: String,
    atoms: Vec<(u8, i8, u8)>,
    bonds: Vec<(usize, usize, String)>,
    expected: Expected,
}

fn parse_order(s: &str) -> BondOrder {
    match s {
        "single" => BondOrder::Single,
        "double" => BondOrder::Double,
        "triple" => BondOrder::Triple,
        "aromatic" => BondOrder::Aromatic,
        other => panic!("Unknown bond order: {other}"),
    }
}

fn error_label(e: &AromaticityError) -> &'static str {
    match e {
        AromaticityError::TripleBondInRing { .. } => "triple_bond_in_ring",
        AromaticityError::InvalidRingDegree { .. } => "invalid_ring_degree",
        AromaticityError::QuinoneValence { .. } => "quinone_valence",
        AromaticityError::InvalidQuinone { .. } => "invalid_quinone",
        AromaticityError::UnsupportedElement { .. } => "unsupported_element",
        AromaticityError::InvalidValence { .. } => "invalid_valence",
        AromaticityError::NoKekuleForm { .. } => "no_kekule_form",
    }
}

fn build(entry: &MolEntry) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for &(atomic_num, formal_charge, hydrogen_count) in &entry.atoms {
        mol.add_atom(Atom {
            atomic_num,
            formal_charge,
            hydrogen_count,
            ..Atom::default()
        });
    }
    for (a, b, order) in &entry.bonds {
        mol.add_bond(
            NodeIndex::new(*a),
            NodeIndex::new(*b),
            Bond::new(parse_order(order)),
        );
    }
    reset_hybridization(&mut mol);
    mol
}

fn count_orders(mol: &Mol<Atom, Bond>, order: BondOrder) -> usize {
    mol.bonds().filter(|&e| mol.bond(e).order == order).count()
}

fn load() -> Vec<MolEntry> {
    serde_json::from_str(include_str!("approval_data/kekule.json")).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Kekulization
// ---------------------------------------------------------------------------

#[test]
fn approval_kekulize() {
    let mut failures = Vec::new();
    for entry in &load() {
        let mut mol = build(entry);
        let before = mol.clone();
        match (kekulize(&mut mol), &entry.expected.error) {
            (Ok(true), None) => {
                let doubles = count_orders(&mol, BondOrder::Double);
                if Some(doubles) != entry.expected.double_bonds {
                    failures.push(format!(
                        "[kekulize] {}: expected {:?} double bonds, got {}",
                        entry.name, entry.expected.double_bonds, doubles
                    ));
                }
                if count_orders(&mol, BondOrder::Aromatic) != 0 {
                    failures.push(format!("[kekulize] {}: aromatic bonds left", entry.name));
                }
            }
            (Err(e), Some(label)) => {
                if error_label(&e) != label {
                    failures.push(format!(
                        "[kekulize] {}: expected {label}, got {e}",
                        entry.name
                    ));
                }
                if mol != before {
                    failures.push(format!("[kekulize] {}: modified on error", entry.name));
                }
            }
            (got, want) => failures.push(format!(
                "[kekulize] {}: expected {:?}, got {:?}",
                entry.name, want, got
            )),
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// ---------------------------------------------------------------------------
// 2. Enumeration
// ---------------------------------------------------------------------------

#[test]
fn approval_enumerate() {
    let mut failures = Vec::new();
    for entry in load().iter().filter(|e| e.expected.error.is_none()) {
        let mol = build(entry);
        let forms: Vec<_> = match enumerate_kekule(&mol) {
            Ok(forms) => forms.collect::<Result<_, _>>().unwrap(),
            Err(e) => {
                failures.push(format!("[enumerate] {}: {e}", entry.name));
                continue;
            }
        };
        if Some(forms.len()) != entry.expected.forms {
            failures.push(format!(
                "[enumerate] {}: expected {:?} forms, got {}",
                entry.name,
                entry.expected.forms,
                forms.len()
            ));
        }
        for (i, form) in forms.iter().enumerate() {
            if forms[i + 1..].contains(form) {
                failures.push(format!("[enumerate] {}: duplicate form {i}", entry.name));
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// ---------------------------------------------------------------------------
// 3. Aromatization of the kekulized forms
// ---------------------------------------------------------------------------

#[test]
fn approval_thiele() {
    let mut failures = Vec::new();
    for entry in load().iter().filter(|e| e.expected.error.is_none()) {
        let mut mol = build(entry);
        kekulize(&mut mol).unwrap();
        let changed = thiele(&mut mol);
        let aromatic = count_orders(&mol, BondOrder::Aromatic);
        if Some(aromatic) != entry.expected.thiele_aromatic_bonds || changed != (aromatic > 0) {
            failures.push(format!(
                "[thiele] {}: expected {:?} aromatic bonds, got {} (changed: {})",
                entry.name, entry.expected.thiele_aromatic_bonds, aromatic, changed
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// ---------------------------------------------------------------------------
// 4. Validation only
// ---------------------------------------------------------------------------

#[test]
fn approval_check_thiele() {
    for entry in &load() {
        let mol = build(entry);
        let full = check_thiele(&mol, false);
        assert_eq!(full, entry.expected.error.is_none(), "{}", entry.name);
        let fast = check_thiele(&mol, true);
        let search_only_failure = entry.expected.error.as_deref() == Some("no_kekule_form");
        assert_eq!(fast, full || search_only_failure, "{}", entry.name);
    }
}
