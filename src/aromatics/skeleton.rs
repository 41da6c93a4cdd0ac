//! Ring skeletons and their connected components.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::rings::ring_edges;

/// Adjacency restricted to the ring bonds under consideration.
///
/// Both levels are ordered by atom index, so every traversal over a skeleton
/// visits atoms lowest index first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skeleton {
    adj: BTreeMap<NodeIndex, BTreeSet<NodeIndex>>,
}

impl Skeleton {
    /// Atoms joined by aromatic bonds, completed with the edges of every SSSR
    /// ring made only of such atoms.
    pub fn from_aromatic_bonds(mol: &Mol<Atom, Bond>) -> Self {
        let mut skeleton = Self::default();
        for e in mol.bonds() {
            if mol.bond(e).order != BondOrder::Aromatic {
                continue;
            }
            if let Some((a, b)) = mol.bond_endpoints(e) {
                skeleton.connect(a, b);
            }
        }
        if skeleton.is_empty() {
            return skeleton;
        }

        for ring in mol.sssr().rings() {
            if ring.iter().all(|a| skeleton.contains(*a)) {
                skeleton.add_ring(ring);
            }
        }
        skeleton
    }

    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) {
        self.adj.entry(a).or_default().insert(b);
        self.adj.entry(b).or_default().insert(a);
    }

    pub fn add_ring(&mut self, ring: &[NodeIndex]) {
        for (a, b) in ring_edges(ring) {
            self.connect(a, b);
        }
    }

    /// Remove `atom` and every edge to it, returning its former neighbors.
    pub fn remove_atom(&mut self, atom: NodeIndex) -> BTreeSet<NodeIndex> {
        let neighbors = self.adj.remove(&atom).unwrap_or_default();
        for m in &neighbors {
            if let Some(ms) = self.adj.get_mut(m) {
                ms.remove(&atom);
            }
        }
        neighbors
    }

    pub fn contains(&self, atom: NodeIndex) -> bool {
        self.adj.contains_key(&atom)
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adj.keys().copied()
    }

    pub fn neighbors(&self, atom: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adj.get(&atom).into_iter().flatten().copied()
    }

    pub fn degree(&self, atom: NodeIndex) -> usize {
        self.adj.get(&atom).map_or(0, BTreeSet::len)
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn adjacency(&self) -> &BTreeMap<NodeIndex, BTreeSet<NodeIndex>> {
        &self.adj
    }

    /// Connected components, found breadth-first from the lowest unvisited atom.
    pub fn components(&self) -> Vec<Skeleton> {
        let mut seen: BTreeSet<NodeIndex> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.atoms() {
            if seen.contains(&start) {
                continue;
            }
            let mut component = Skeleton::default();
            let mut queue = VecDeque::from([start]);
            seen.insert(start);
            while let Some(current) = queue.pop_front() {
                let neighbors = self.adj.get(&current).cloned().unwrap_or_default();
                for &m in &neighbors {
                    if seen.insert(m) {
                        queue.push_back(m);
                    }
                }
                component.adj.insert(current, neighbors);
            }
            components.push(component);
        }
        components
    }

    /// Minimal number of rings covering the skeleton (cyclomatic number).
    pub fn cyclomatic_number(&self) -> usize {
        (self.edge_count() + self.components().len()).saturating_sub(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{benzene, n, naphthalene};

    #[test]
    fn benzene_skeleton() {
        let mol = benzene(BondOrder::Aromatic);
        let skeleton = Skeleton::from_aromatic_bonds(&mol);
        assert_eq!(skeleton.len(), 6);
        assert_eq!(skeleton.edge_count(), 6);
        assert!(skeleton.atoms().all(|a| skeleton.degree(a) == 2));
        assert_eq!(skeleton.neighbors(n(0)).collect::<Vec<_>>(), vec![n(1), n(5)]);
    }

    #[test]
    fn kekule_benzene_has_no_skeleton() {
        let mol = benzene(BondOrder::Single);
        assert!(Skeleton::from_aromatic_bonds(&mol).is_empty());
    }

    #[test]
    fn ring_edges_fill_missing_bonds() {
        let mut mol = benzene(BondOrder::Aromatic);
        let e = mol.bond_between(n(0), n(1)).unwrap();
        mol.bond_mut(e).order = BondOrder::Single;
        mol.flush_cache();
        let skeleton = Skeleton::from_aromatic_bonds(&mol);
        assert_eq!(skeleton.edge_count(), 6);
    }

    #[test]
    fn naphthalene_fusion_degrees() {
        let mol = naphthalene(BondOrder::Aromatic);
        let skeleton = Skeleton::from_aromatic_bonds(&mol);
        assert_eq!(skeleton.edge_count(), 11);
        assert_eq!(skeleton.degree(n(3)), 3);
        assert_eq!(skeleton.degree(n(8)), 3);
        assert_eq!(skeleton.cyclomatic_number(), 2);
    }

    #[test]
    fn components_partition_edges() {
        let mut skeleton = Skeleton::default();
        skeleton.add_ring(&[n(0), n(1), n(2)]);
        skeleton.add_ring(&[n(5), n(6), n(7), n(8)]);
        let components = skeleton.components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].atoms().collect::<Vec<_>>(), vec![n(0), n(1), n(2)]);
        let total: usize = components.iter().map(Skeleton::edge_count).sum();
        assert_eq!(total, skeleton.edge_count());
    }

    #[test]
    fn remove_atom_detaches_neighbors() {
        let mut skeleton = Skeleton::default();
        skeleton.add_ring(&[n(0), n(1), n(2), n(3)]);
        let removed = skeleton.remove_atom(n(1));
        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![n(0), n(2)]);
        assert_eq!(skeleton.degree(n(0)), 1);
        assert_eq!(skeleton.degree(n(2)), 1);
        assert_eq!(skeleton.edge_count(), 2);
    }
}
