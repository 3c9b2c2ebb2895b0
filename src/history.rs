use std::collections::VecDeque;

use crate::error::ParseError;
use crate::math::hex::{format_hex, parse_hex};
use crate::types::HistoryEntry;

pub const DEFAULT_CAPACITY: usize = 10;

/// Recently checked foreground/background pairs, most recent first.
///
/// Pairs are stored in canonical `#RRGGBB` form, so `#f00` and `#FF0000`
/// count as the same entry.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ColorHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a pair at the front. An existing identical pair is moved rather
    /// than duplicated; the oldest entry falls off past capacity.
    pub fn record(&mut self, foreground: &str, background: &str) -> Result<(), ParseError> {
        let entry = HistoryEntry {
            foreground: format_hex(parse_hex(foreground)?),
            background: format_hex(parse_hex(background)?),
        };
        self.entries.retain(|e| *e != entry);
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
