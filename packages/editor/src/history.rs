//! # History Stack
//!
//! Snapshot-based undo/redo over the block list.
//!
//! ## Design
//!
//! - Every committed mutation records a deep copy of the whole list
//! - `past` holds states older than the current baseline, `future` holds
//!   states undone from it
//! - A commit after an undo discards all redo entries (linear history,
//!   no branching)
//! - At most [`MAX_SNAPSHOTS`] past entries are retained; the oldest is
//!   evicted first

use mailforge_blocks::Block;

/// Retention bound for undo snapshots.
pub const MAX_SNAPSHOTS: usize = 50;

#[derive(Debug)]
pub struct HistoryStack {
    past: Vec<Vec<Block>>,
    /// The last committed state.
    baseline: Vec<Block>,
    future: Vec<Vec<Block>>,
}

impl HistoryStack {
    pub fn new(initial: Vec<Block>) -> Self {
        Self {
            past: Vec::new(),
            baseline: initial,
            future: Vec::new(),
        }
    }

    /// Record a committed state. Returns `false` (and records nothing) when
    /// the state equals the current baseline, so redundant `commit()` calls
    /// after no-op edits don't pollute the stack.
    pub fn commit(&mut self, state: &[Block]) -> bool {
        if state == self.baseline.as_slice() {
            return false;
        }

        let previous = std::mem::replace(&mut self.baseline, state.to_vec());
        self.past.push(previous);
        if self.past.len() > MAX_SNAPSHOTS {
            self.past.remove(0);
        }
        self.future.clear();
        true
    }

    /// Step back one snapshot; `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Vec<Block>> {
        let previous = self.past.pop()?;
        let current = std::mem::replace(&mut self.baseline, previous.clone());
        self.future.push(current);
        Some(previous)
    }

    /// Step forward one snapshot; `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Vec<Block>> {
        let next = self.future.pop()?;
        let current = std::mem::replace(&mut self.baseline, next.clone());
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailforge_blocks::{Block, BlockRegistry};

    fn block(kind: &str, id: &str) -> Block {
        let (content, style) = BlockRegistry::default_block(kind).unwrap();
        Block::new(id, content, style)
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = HistoryStack::new(vec![]);
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_undo_restores_exact_pre_mutation_state() {
        let initial = vec![block("text", "s-1")];
        let mut history = HistoryStack::new(initial.clone());

        let mutated = vec![block("text", "s-1"), block("button", "s-2")];
        assert!(history.commit(&mutated));

        assert_eq!(history.undo(), Some(initial.clone()));
        assert_eq!(history.redo(), Some(mutated));
    }

    #[test]
    fn test_commit_after_undo_discards_future() {
        let mut history = HistoryStack::new(vec![]);

        history.commit(&[block("text", "s-1")]);
        history.undo().unwrap();
        assert!(history.can_redo());

        history.commit(&[block("button", "s-2")]);
        assert!(!history.can_redo());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_identical_state_is_not_recorded() {
        let state = vec![block("text", "s-1")];
        let mut history = HistoryStack::new(state.clone());

        assert!(!history.commit(&state));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut history = HistoryStack::new(vec![]);

        for i in 0..(MAX_SNAPSHOTS + 10) {
            history.commit(&[block("text", &format!("s-{}", i))]);
        }
        assert_eq!(history.undo_depth(), MAX_SNAPSHOTS);

        // Walk all the way back: the earliest reachable state is not the
        // initial empty list but a later snapshot.
        let mut last = None;
        while let Some(state) = history.undo() {
            last = Some(state);
        }
        let last = last.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, "s-9");
    }
}
