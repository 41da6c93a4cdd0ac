//! Lazy product of per-component Kekulé searches.

use super::error::AromaticityError;
use super::search::{KekuleBond, KekuleSearch};

/// Cartesian product of the solutions of independent component searches.
///
/// Works like an odometer: the last component varies fastest. Solutions are
/// pulled from a component only when the odometer first reaches them and are
/// cached for later wrap-arounds, so taking the first global assignment costs
/// one solution per component.
#[derive(Debug)]
pub struct KekuleProduct {
    searches: Vec<KekuleSearch>,
    seen: Vec<Vec<Vec<KekuleBond>>>,
    exhausted: Vec<bool>,
    cursor: Vec<usize>,
    started: bool,
    done: bool,
}

impl KekuleProduct {
    pub fn new(searches: Vec<KekuleSearch>) -> Self {
        let count = searches.len();
        Self {
            searches,
            seen: vec![Vec::new(); count],
            exhausted: vec![false; count],
            cursor: vec![0; count],
            started: false,
            done: false,
        }
    }

    /// Make sure solution `index` of component `at` is cached.
    ///
    /// Returns `Ok(false)` once the component has nothing more to give.
    fn fetch(&mut self, at: usize, index: usize) -> Result<bool, AromaticityError> {
        while self.seen[at].len() <= index {
            if self.exhausted[at] {
                return Ok(false);
            }
            match self.searches[at].next() {
                Some(Ok(solution)) => self.seen[at].push(solution),
                Some(Err(e)) => return Err(e),
                None => self.exhausted[at] = true,
            }
        }
        Ok(true)
    }

    fn assemble(&self) -> Vec<KekuleBond> {
        self.cursor
            .iter()
            .enumerate()
            .flat_map(|(at, &i)| self.seen[at][i].iter().copied())
            .collect()
    }

    fn first(&mut self) -> Result<bool, AromaticityError> {
        for at in 0..self.searches.len() {
            if !self.fetch(at, 0)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Step the odometer; `Ok(false)` when every combination has been seen.
    fn advance(&mut self) -> Result<bool, AromaticityError> {
        for at in (0..self.searches.len()).rev() {
            let next = self.cursor[at] + 1;
            if self.fetch(at, next)? {
                self.cursor[at] = next;
                for later in &mut self.cursor[at + 1..] {
                    *later = 0;
                }
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Iterator for KekuleProduct {
    type Item = Result<Vec<KekuleBond>, AromaticityError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = if self.started {
            self.advance()
        } else {
            self.started = true;
            self.first()
        };
        match step {
            Ok(true) => Some(Ok(self.assemble())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
