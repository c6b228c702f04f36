//! Precomputed converter table
//!
//! Systems live in an indexed arena; converters are stored in one flat
//! `N * N` table addressed by `(from_index, to_index)`. The diagonal is
//! always empty: converting a system into itself is not supported.

use std::collections::HashMap;

use tracing::debug;

use super::confidence::{confidence, is_exact};
use super::convert::ConverterKind;
use crate::system::NotationSystem;

/// Converter for one ordered pair, with its pair-level quality figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairConverter {
    pub kind: ConverterKind,
    pub confidence: f64,
    pub is_exact: bool,
}

/// Lookup table of converters for every ordered pair of distinct systems
#[derive(Debug, Clone, Default)]
pub struct ConverterMatrix {
    systems: Vec<NotationSystem>,
    index: HashMap<String, usize>,
    table: Vec<Option<PairConverter>>,
}

impl ConverterMatrix {
    /// Build the table for `systems`. O(N²).
    ///
    /// When two systems share an id, the later one wins the id lookup.
    pub fn build(systems: Vec<NotationSystem>) -> Self {
        let count = systems.len();
        let mut index = HashMap::with_capacity(count);
        for (i, system) in systems.iter().enumerate() {
            index.insert(system.id.clone(), i);
        }

        let mut table = vec![None; count * count];
        for (from_idx, from) in systems.iter().enumerate() {
            for (to_idx, to) in systems.iter().enumerate() {
                if from_idx == to_idx {
                    continue;
                }
                table[from_idx * count + to_idx] = Some(PairConverter {
                    kind: ConverterKind::for_pair(from, to),
                    confidence: confidence(from.scale_type(), to.scale_type()),
                    is_exact: is_exact(from, to),
                });
            }
        }

        debug!(
            systems = count,
            pairs = count * count.saturating_sub(1),
            "build_converter_matrix"
        );

        Self {
            systems,
            index,
            table,
        }
    }

    pub fn systems(&self) -> &[NotationSystem] {
        &self.systems
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn system(&self, index: usize) -> Option<&NotationSystem> {
        self.systems.get(index)
    }

    /// Both systems and the converter for `(from, to)`.
    ///
    /// `None` on the diagonal or when an index is out of bounds.
    pub fn get(
        &self,
        from: usize,
        to: usize,
    ) -> Option<(&NotationSystem, &NotationSystem, PairConverter)> {
        let count = self.systems.len();
        if from >= count || to >= count {
            return None;
        }
        let converter = self.table[from * count + to]?;
        Some((&self.systems[from], &self.systems[to], converter))
    }
}
