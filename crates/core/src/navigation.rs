//! Sequential navigation through a captured result set
//!
//! A [`Snapshot`] pairs an immutable, shared result sequence with a position.
//! Moving to a neighbour produces a new snapshot over the same records; the
//! records themselves are never copied or mutated.

use std::sync::Arc;

use serde::Serialize;

use crate::nasa::MediaRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Item not found.")]
    NotFound,
}

/// Step taken from the current item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed offset applied to the current index
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Navigation state handed to a detail renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationInfo {
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based position of the current item, `None` when there is no current item
    pub position: Option<usize>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    results: Arc<[MediaRecord]>,
    index: usize,
}

impl Snapshot {
    pub fn new(results: Arc<[MediaRecord]>, index: usize) -> Self {
        Self { results, index }
    }

    /// A snapshot with no results; its current item is always `NotFound`
    pub fn empty() -> Self {
        Self {
            results: Arc::from(Vec::new()),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &Arc<[MediaRecord]> {
        &self.results
    }

    pub fn current(&self) -> Result<&MediaRecord, NavigationError> {
        self.results.get(self.index).ok_or(NavigationError::NotFound)
    }

    /// Snapshot moved one step in `direction`, or `None` at the boundary
    pub fn step(&self, direction: Direction) -> Option<Snapshot> {
        let new_index = self.index.checked_add_signed(direction.offset())?;
        if new_index >= self.results.len() {
            return None;
        }
        Some(Snapshot {
            results: Arc::clone(&self.results),
            index: new_index,
        })
    }

    /// Like [`Snapshot::step`], but returns an unchanged copy at the boundary
    pub fn navigate(&self, direction: Direction) -> Snapshot {
        self.step(direction).unwrap_or_else(|| self.clone())
    }

    pub fn info(&self) -> NavigationInfo {
        let in_range = self.index < self.results.len();
        NavigationInfo {
            has_previous: in_range && self.index > 0,
            has_next: in_range && self.index + 1 < self.results.len(),
            position: in_range.then_some(self.index + 1),
            total: self.results.len(),
        }
    }
}
