//! Single-slot copy/paste buffer.
//!
//! Owned by one engine instance, so two editors never share a slot. The slot
//! keeps a deep clone of the copied block; pasting re-ids a fresh clone and
//! leaves the slot intact, so the same block can be pasted repeatedly.

use mailforge_blocks::Block;

#[derive(Debug, Default)]
pub struct Clipboard {
    slot: Option<Block>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a deep clone, replacing any previous copy.
    pub fn copy(&mut self, block: &Block) {
        self.slot = Some(block.clone());
    }

    /// The stored block, if any. Paste logic clones and re-ids it.
    pub fn block(&self) -> Option<&Block> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
