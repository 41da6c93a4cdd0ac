use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// A set of rings, each an ordered cycle of atom indices.
///
/// Rings are normalized to start at their lowest atom and to continue towards
/// the lower of its two ring neighbors; the set is sorted by size, then
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingInfo {
    rings: Vec<Vec<NodeIndex>>,
}

impl RingInfo {
    pub fn sssr<A, B>(mol: &Mol<A, B>) -> Self {
        let num_expected = Self::expected_ring_count(mol);
        if num_expected == 0 {
            return Self { rings: vec![] };
        }
        let edges = mol.bonds().filter_map(|e| mol.bond_endpoints(e));
        let graph = RingGraph::new(mol.atoms(), edges);
        Self {
            rings: graph.smallest_rings(num_expected),
        }
    }

    /// Smallest `num_rings` independent rings of an arbitrary adjacency map.
    ///
    /// Used when a subgraph of the molecule has to be searched on its own,
    /// e.g. a trimmed aromatic skeleton.
    pub fn sssr_of(adjacency: &BTreeMap<NodeIndex, BTreeSet<NodeIndex>>, num_rings: usize) -> Self {
        if num_rings == 0 {
            return Self { rings: vec![] };
        }
        let edges = adjacency
            .iter()
            .flat_map(|(&a, ms)| ms.iter().filter(move |&&b| a < b).map(move |&b| (a, b)));
        let graph = RingGraph::new(adjacency.keys().copied(), edges);
        Self {
            rings: graph.smallest_rings(num_rings),
        }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Vec<NodeIndex>] {
        &self.rings
    }

    pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
        let v = mol.atom_count();
        let e = mol.bond_count();
        let c = connected_components(mol.graph());
        (e + c).saturating_sub(v)
    }
}

/// Consecutive atom pairs of a ring, including the closing pair.
pub fn ring_edges(ring: &[NodeIndex]) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
    let len = ring.len();
    (0..len).map(move |i| (ring[i], ring[(i + 1) % len]))
}

/// Compact graph with dense local indices, shared by both ring searches.
struct RingGraph {
    nodes: Vec<NodeIndex>,
    adj: Vec<Vec<usize>>,
    edge_ids: HashMap<(usize, usize), usize>,
}

impl RingGraph {
    fn new<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = NodeIndex>,
        E: IntoIterator<Item = (NodeIndex, NodeIndex)>,
    {
        let nodes: Vec<NodeIndex> = nodes.into_iter().collect();
        let local: HashMap<NodeIndex, usize> =
            nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        let mut adj = vec![vec![]; nodes.len()];
        let mut edge_ids = HashMap::new();
        for (a, b) in edges {
            let (Some(&u), Some(&v)) = (local.get(&a), local.get(&b)) else {
                continue;
            };
            if u == v || edge_ids.contains_key(&key(u, v)) {
                continue;
            }
            let id = edge_ids.len();
            edge_ids.insert(key(u, v), id);
            adj[u].push(v);
            adj[v].push(u);
        }
        Self {
            nodes,
            adj,
            edge_ids,
        }
    }

    fn smallest_rings(&self, num_needed: usize) -> Vec<Vec<NodeIndex>> {
        let num_edges = self.edge_ids.len();
        let mut result = Vec::with_capacity(num_needed);
        let mut basis: Vec<Vec<u64>> = Vec::with_capacity(num_needed);

        for ring in self.horton_candidates() {
            if result.len() >= num_needed {
                break;
            }
            let bv = self.edge_bitvector(&ring, num_edges);
            if bv.iter().all(|&w| w == 0) {
                continue;
            }
            if try_add_to_basis(&mut basis, bv) {
                let atoms: Vec<NodeIndex> = ring.iter().map(|&i| self.nodes[i]).collect();
                result.push(normalize_ring(&atoms));
            }
        }

        result.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        result
    }

    fn horton_candidates(&self) -> Vec<Vec<usize>> {
        let n = self.nodes.len();
        let dist = self.all_pairs_bfs();
        let pred = self.all_pairs_predecessors(&dist);

        let mut edges: Vec<(usize, usize)> = self.edge_ids.keys().copied().collect();
        edges.sort_unstable();

        let mut candidates: Vec<Vec<usize>> = Vec::new();
        for (u, v) in edges {
            for w in 0..n {
                let du = dist[w][u];
                let dv = dist[w][v];
                if du == u32::MAX || dv == u32::MAX {
                    continue;
                }
                if du as usize + dv as usize + 1 < 3 {
                    continue;
                }
                let path_u = reconstruct_path(&pred, w, u);
                let path_v = reconstruct_path(&pred, w, v);
                if path_u.is_empty() || path_v.is_empty() {
                    continue;
                }
                if paths_share_internal_node(&path_u, &path_v) {
                    continue;
                }
                let mut ring = path_u;
                ring.extend(path_v[1..].iter().rev());
                candidates.push(ring);
            }
        }

        candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        candidates.dedup();
        candidates
    }

    fn all_pairs_bfs(&self) -> Vec<Vec<u32>> {
        let n = self.nodes.len();
        let mut dist = vec![vec![u32::MAX; n]; n];
        for (src, row) in dist.iter_mut().enumerate() {
            row[src] = 0;
            let mut queue = VecDeque::from([src]);
            while let Some(cur) = queue.pop_front() {
                let d = row[cur];
                for &nb in &self.adj[cur] {
                    if row[nb] == u32::MAX {
                        row[nb] = d + 1;
                        queue.push_back(nb);
                    }
                }
            }
        }
        dist
    }

    fn all_pairs_predecessors(&self, dist: &[Vec<u32>]) -> Vec<Vec<Option<usize>>> {
        let n = self.nodes.len();
        let mut pred = vec![vec![None; n]; n];
        for src in 0..n {
            let mut visited = vec![false; n];
            visited[src] = true;
            let mut queue = VecDeque::from([src]);
            while let Some(cur) = queue.pop_front() {
                for &nb in &self.adj[cur] {
                    if !visited[nb] && dist[src][nb] == dist[src][cur] + 1 {
                        visited[nb] = true;
                        pred[src][nb] = Some(cur);
                        queue.push_back(nb);
                    }
                }
            }
        }
        pred
    }

    fn edge_bitvector(&self, ring: &[usize], num_edges: usize) -> Vec<u64> {
        let mut bv = vec![0u64; num_edges.div_ceil(64)];
        let len = ring.len();
        for i in 0..len {
            if let Some(&idx) = self.edge_ids.get(&key(ring[i], ring[(i + 1) % len])) {
                bv[idx / 64] |= 1u64 << (idx % 64);
            }
        }
        bv
    }
}

fn key(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

fn reconstruct_path(pred: &[Vec<Option<usize>>], src: usize, dst: usize) -> Vec<usize> {
    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        match pred[src][cur] {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => return vec![],
        }
    }
    path.reverse();
    path
}

fn paths_share_internal_node(path_u: &[usize], path_v: &[usize]) -> bool {
    if path_u.len() < 2 || path_v.len() < 2 {
        return false;
    }
    path_u[1..].iter().any(|node| path_v[1..].contains(node))
}

fn try_add_to_basis(basis: &mut Vec<Vec<u64>>, candidate: Vec<u64>) -> bool {
    let mut v = candidate;
    for row in basis.iter() {
        if let Some(p) = leading_bit(row) {
            if v[p / 64] & (1u64 << (p % 64)) != 0 {
                xor_into(&mut v, row);
            }
        }
    }
    if v.iter().all(|&w| w == 0) {
        return false;
    }
    basis.push(v);
    true
}

fn leading_bit(bv: &[u64]) -> Option<usize> {
    for (i, &word) in bv.iter().enumerate() {
        if word != 0 {
            return Some(i * 64 + word.trailing_zeros() as usize);
        }
    }
    None
}

fn xor_into(a: &mut [u64], b: &[u64]) {
    for (aw, bw) in a.iter_mut().zip(b.iter()) {
        *aw ^= *bw;
    }
}

fn normalize_ring(ring: &[NodeIndex]) -> Vec<NodeIndex> {
    let Some(min_pos) = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, idx)| idx)
        .map(|(i, _)| i)
    else {
        return vec![];
    };

    let len = ring.len();
    let mut normalized: Vec<NodeIndex> = (0..len).map(|i| ring[(min_pos + i) % len]).collect();
    if len > 2 && normalized[1] > normalized[len - 1] {
        normalized[1..].reverse();
    }
    normalized
}
