//! Gate inputs and the boolean fold that combines them.
//!
//! A relay output can be driven by several independent logical inputs
//! ("gates").  The [`GateBank`] owns their values in fixed-capacity storage
//! sized once at construction; [`CombineMode`] folds them into the single
//! logical state the relay follows.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on gates per output.
pub const MAX_GATES: usize = 32;

/// Boolean fold applied across all gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    /// Output follows any active gate.
    #[default]
    Or,
    /// Output follows only when every gate is active.
    And,
    /// Odd parity.  With one gate toggled at a time this acts as a toggle.
    Xor,
}

impl CombineMode {
    /// Fold `values` into a single logical state.
    ///
    /// An empty slice folds to `false`.
    pub fn fold(self, values: &[bool]) -> bool {
        let Some((&first, rest)) = values.split_first() else {
            return false;
        };
        rest.iter().fold(first, |acc, &v| match self {
            Self::Or => acc | v,
            Self::And => acc & v,
            Self::Xor => acc ^ v,
        })
    }
}

/// Fixed-length gate storage.  Never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateBank {
    values: Vec<bool, MAX_GATES>,
}

impl GateBank {
    /// Allocate `count` gates, all inactive.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::Config("gate count must be at least 1"));
        }
        let mut values = Vec::new();
        values
            .resize(count, false)
            .map_err(|_| Error::Config("gate count exceeds MAX_GATES"))?;
        Ok(Self { values })
    }

    /// One inactive gate.
    pub fn single() -> Self {
        Self {
            values: [false].into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a bank holds at least one gate.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Store `value` at `gate`.  Out-of-range indices are rejected.
    pub fn set(&mut self, gate: usize, value: bool) -> Result<()> {
        let gate_count = self.values.len();
        let slot = self
            .values
            .get_mut(gate)
            .ok_or(Error::GateOutOfRange { gate, gate_count })?;
        *slot = value;
        Ok(())
    }

    pub fn get(&self, gate: usize) -> Option<bool> {
        self.values.get(gate).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn combine(&self, mode: CombineMode) -> bool {
        mode.fold(&self.values)
    }
}
