//! Backtracking search for Kekulé forms of one skeleton component.
//!
//! The search walks the component edge by edge, assigning each edge a single
//! or double order as it goes. Alternatives are kept as explicit branches on
//! a frontier stack rather than on the call stack, which lets the search stop
//! after each complete assignment and resume on the next `next()` call.
//!
//! A branch is a work list of pending steps. A step records the atom to enter,
//! the atom it is entered from and the order of the connecting bond. When a
//! branch forks, a copy of it is pushed on top of the frontier; the forked one
//! stays below with a roll-back mark on its newest step, so the path can be
//! truncated to the fork point once everything above it is exhausted.

use std::collections::{BTreeSet, HashSet};

use petgraph::graph::NodeIndex;
use tracing::trace;

use super::classify::Roles;
use super::error::AromaticityError;
use super::skeleton::Skeleton;
use crate::bond::BondOrder;

/// One assigned skeleton edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KekuleBond {
    pub atom: NodeIndex,
    pub neighbor: NodeIndex,
    pub order: BondOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    atom: NodeIndex,
    prev: NodeIndex,
    order: BondOrder,
    /// Path length to restore when this branch resumes after a fork above it.
    cut: Option<usize>,
}

impl Step {
    fn new(atom: NodeIndex, prev: NodeIndex, order: BondOrder) -> Self {
        Self {
            atom,
            prev,
            order,
            cut: None,
        }
    }

    fn with_cut(mut self, cut: usize) -> Self {
        self.cut = Some(cut);
        self
    }
}

/// Lazy, finite, non-restartable sequence of Kekulé assignments for one
/// connected skeleton component.
///
/// Yields `Ok` for every assignment found. If the search ends without finding
/// any, it yields a single [`AromaticityError::NoKekuleForm`] and then ends.
#[derive(Debug, Clone)]
pub struct KekuleSearch {
    rings: Skeleton,
    double_bonded: BTreeSet<NodeIndex>,
    pyrroles: BTreeSet<NodeIndex>,
    start: Option<NodeIndex>,
    size: usize,
    stack: Vec<Vec<Step>>,
    path: Vec<KekuleBond>,
    visited: HashSet<NodeIndex>,
    yielded: bool,
    finished: bool,
}

impl KekuleSearch {
    /// Prepare a search over a connected component. An empty component has
    /// no start atom and yields a single [`AromaticityError::NoKekuleForm`].
    pub fn new(component: Skeleton, roles: Roles) -> Self {
        let Roles {
            mut double_bonded,
            pyrroles,
        } = roles;
        let size = component.edge_count();

        let degree_two = |pick_pyrroles: bool| {
            component
                .atoms()
                .find(|&a| component.degree(a) == 2 && (pick_pyrroles || !pyrroles.contains(&a)))
        };

        let (start, stack) = if let Some(start) = double_bonded.first().copied() {
            let first = component.neighbors(start).next();
            let stack = first
                .map(|next| vec![vec![Step::new(next, start, BondOrder::Single).with_cut(0)]])
                .unwrap_or_default();
            (Some(start), stack)
        } else if let Some(start) = degree_two(false).or_else(|| degree_two(true)) {
            (Some(start), Self::fan_out(&component, start, BondOrder::Single))
        } else if let Some(start) = component.atoms().next() {
            // Every atom sits at a ring fusion: fix one atom's double bond by
            // starting with it and treat the atom as saturated from then on.
            double_bonded.insert(start);
            (Some(start), Self::fan_out(&component, start, BondOrder::Double))
        } else {
            (None, Vec::new())
        };

        trace!(start = ?start, edges = size, "kekule search start");

        Self {
            rings: component,
            double_bonded,
            pyrroles,
            start,
            size,
            stack,
            path: Vec::with_capacity(size),
            visited: HashSet::new(),
            yielded: false,
            finished: false,
        }
    }

    /// One branch per neighbor of `start`; the last neighbor is explored first.
    fn fan_out(component: &Skeleton, start: NodeIndex, order: BondOrder) -> Vec<Vec<Step>> {
        component
            .neighbors(start)
            .map(|next| vec![Step::new(next, start, order).with_cut(0)])
            .collect()
    }

    fn is_double_bonded(&self, atom: NodeIndex) -> bool {
        self.double_bonded.contains(&atom)
    }

    fn is_pyrrole(&self, atom: NodeIndex) -> bool {
        self.pyrroles.contains(&atom)
    }

    fn push(&mut self, step: Step) {
        if let Some(branch) = self.stack.last_mut() {
            branch.push(step);
        }
    }

    /// Queue a ring-closing step so it is taken after everything else.
    fn push_last(&mut self, step: Step) {
        if let Some(branch) = self.stack.last_mut() {
            branch.insert(0, step);
        }
    }

    /// Drop the current branch and roll the path back to where the branch
    /// below it forked off.
    fn abandon(&mut self) {
        self.stack.pop();
        let cut = self
            .stack
            .last()
            .and_then(|branch| branch.last())
            .and_then(|step| step.cut);
        if let Some(cut) = cut {
            self.path.truncate(cut);
            self.visited = self.path.iter().map(|b| b.atom).collect();
        }
        trace!(depth = self.path.len(), branches = self.stack.len(), "backtrack");
    }

    /// Commit the edge `atom`-`closure` as single, consuming the pending
    /// single step queued for it. Fails if the edge was queued otherwise.
    fn close_single(&mut self, atom: NodeIndex, closure: NodeIndex) -> bool {
        let Some(branch) = self.stack.last_mut() else {
            return false;
        };
        let pending = branch.iter().position(|s| {
            s.atom == atom && s.prev == closure && s.order == BondOrder::Single
        });
        match pending {
            Some(pos) => {
                branch.remove(pos);
                self.path.push(KekuleBond {
                    atom: closure,
                    neighbor: atom,
                    order: BondOrder::Single,
                });
                true
            }
            None => false,
        }
    }

    /// Push a copy of the current branch on top of the frontier and return
    /// the path length the forked branch has to roll back to.
    fn fork(&mut self) -> Option<usize> {
        let copy = self.stack.last()?.clone();
        self.stack.push(copy);
        Some(self.path.len())
    }

    /// Extend the search from a freshly committed step.
    fn grow(&mut self, step: Step) {
        let atom = step.atom;
        let mut order = step.order;
        let has_double_bonded = !self.double_bonded.is_empty();

        let mut closes_start = false;
        let mut closures = Vec::new();
        let mut forward = Vec::new();
        for next in self.rings.neighbors(atom) {
            if next == step.prev {
                continue;
            } else if Some(next) == self.start {
                closes_start = true;
            } else if self.visited.contains(&next) {
                closures.push(next);
            } else {
                forward.push(next);
            }
        }

        if let Some(start) = self.start.filter(|_| closes_start) {
            let closing = if order == BondOrder::Double {
                has_double_bonded.then_some(BondOrder::Single)
            } else if has_double_bonded {
                let can_close = !forward.is_empty()
                    || self.is_double_bonded(atom)
                    || self.is_pyrrole(atom);
                can_close.then_some(BondOrder::Single)
            } else {
                order = BondOrder::Double;
                Some(BondOrder::Double)
            };
            match closing {
                Some(closing) => self.push_last(Step::new(start, atom, closing)),
                None => return self.abandon(),
            }
        }

        if order == BondOrder::Double || self.is_double_bonded(atom) {
            for closure in closures {
                if !self.close_single(atom, closure) {
                    return self.abandon();
                }
            }
            for next in forward {
                self.push(Step::new(next, atom, BondOrder::Single));
            }
            return;
        }

        match forward[..] {
            [next] => {
                if self.is_double_bonded(next) {
                    if self.is_pyrrole(atom) {
                        self.push(Step::new(next, atom, BondOrder::Single));
                    } else {
                        self.abandon();
                    }
                } else if self.is_pyrrole(atom) {
                    // Lone pair first; the double-bonded variant waits below.
                    if let Some(cut) = self.fork() {
                        let depth = self.stack.len();
                        self.stack[depth - 2]
                            .push(Step::new(next, atom, BondOrder::Double).with_cut(cut));
                        self.push(Step::new(next, atom, BondOrder::Single));
                    }
                } else {
                    self.push(Step::new(next, atom, BondOrder::Double));
                    if let Some(&closure) = closures.first() {
                        if !self.close_single(atom, closure) {
                            self.abandon();
                        }
                    }
                }
            }
            [first, second, ..] => match (self.is_double_bonded(first), self.is_double_bonded(second)) {
                (true, true) => self.abandon(),
                (true, false) => {
                    self.push(Step::new(first, atom, BondOrder::Single));
                    self.push(Step::new(second, atom, BondOrder::Double));
                }
                (false, true) => {
                    self.push(Step::new(second, atom, BondOrder::Single));
                    self.push(Step::new(first, atom, BondOrder::Double));
                }
                (false, false) => {
                    if let Some(cut) = self.fork() {
                        let depth = self.stack.len();
                        let below = &mut self.stack[depth - 2];
                        below.push(Step::new(first, atom, BondOrder::Single));
                        below.push(Step::new(second, atom, BondOrder::Double).with_cut(cut));
                        self.push(Step::new(second, atom, BondOrder::Single));
                        self.push(Step::new(first, atom, BondOrder::Double));
                    }
                }
            },
            [] => {
                if !closures.is_empty() && !self.is_pyrrole(atom) {
                    self.abandon();
                }
            }
        }
    }

    fn complete(&self) -> bool {
        self.path.len() == self.size
    }

    fn take_solution(&mut self) -> Vec<KekuleBond> {
        let found = self.path.clone();
        self.yielded = true;
        self.abandon();
        found
    }
}

impl Iterator for KekuleSearch {
    type Item = Result<Vec<KekuleBond>, AromaticityError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some(branch) = self.stack.last_mut() else {
                self.finished = true;
                if self.yielded {
                    return None;
                }
                return Some(Err(AromaticityError::NoKekuleForm {
                    atoms: self.rings.atoms().collect(),
                }));
            };
            let Some(step) = branch.pop() else {
                self.abandon();
                continue;
            };

            self.path.push(KekuleBond {
                atom: step.atom,
                neighbor: step.prev,
                order: step.order,
            });
            self.visited.insert(step.atom);

            if self.complete() {
                return Some(Ok(self.take_solution()));
            }
            if Some(step.atom) != self.start {
                self.grow(step);
                if self.complete() {
                    return Some(Ok(self.take_solution()));
                }
            }
        }
    }
}
