//! Reorders concurrently solved equations back into input order
//!
//! Equations are numbered `0..n` by the executor. Results that arrive ahead
//! of their turn wait in a map keyed by that index until every earlier one
//! has been emitted.

use crate::executor::EquationResult;
use std::collections::BTreeMap;

/// Buffers out-of-order results and releases them by input index
pub struct ResultAggregator {
    /// Index of the next result to emit
    next: usize,
    /// Number of equations in the batch
    total: usize,
    /// Results that arrived early
    pending: BTreeMap<usize, EquationResult>,
}

impl ResultAggregator {
    /// Aggregator for a batch of `total` equations
    pub fn new(total: usize) -> Self {
        Self {
            next: 0,
            total,
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return every result now ready, in input order
    pub fn add(&mut self, result: EquationResult) -> Vec<EquationResult> {
        self.pending.insert(result.index, result);

        let mut ready = Vec::new();
        while let Some(result) = self.pending.remove(&self.next) {
            ready.push(result);
            self.next += 1;
        }
        ready
    }

    /// Results still buffered because an earlier one never arrived
    pub fn drain(&mut self) -> Vec<EquationResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// True once every index of the batch has been emitted
    pub fn is_complete(&self) -> bool {
        self.next >= self.total
    }
}
