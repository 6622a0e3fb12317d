//! # Block Store
//!
//! The mutable ordered collection of blocks plus the selection cursor.
//!
//! ## Mutation Semantics
//!
//! - Indices are clamped, never rejected
//! - Mutations naming a missing block id are no-ops: the store is left
//!   unchanged and nothing panics
//! - Every mutation reports whether it changed anything, so the caller
//!   decides what reaches history
//! - Property patches merge live edits without committing; the engine's
//!   explicit `commit()` records the snapshot

use mailforge_blocks::{
    Alignment, Block, BlockContent, BlockRegistry, Border, Gradient, IdGenerator, RegistryError,
    Shadow, Spacing,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// One typed field update, mergeable into a block without a history commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockPatch {
    Align(Alignment),
    Padding(Spacing),
    Margin(Spacing),
    BackgroundColor(String),
    BackgroundGradient(Gradient),
    BackgroundImage(String),
    BackgroundOpacity(u8),
    Border(Border),
    BorderRadius(f64),
    Shadow(Shadow),
    /// Replace the primary rich-text field of the block's kind.
    RichText(String),
    /// Image source URL.
    Src(String),
    /// Video thumbnail URL.
    VideoThumbnail(String),
    /// Target link of an image or button.
    LinkUrl(String),
    /// Replace the whole content payload.
    Content(BlockContent),
}

/// Ordered block list + selection for one editing session.
#[derive(Debug)]
pub struct BlockStore {
    blocks: Vec<Block>,
    selected: Option<String>,
    ids: IdGenerator,
}

impl BlockStore {
    pub fn new(session_label: &str) -> Self {
        Self {
            blocks: Vec::new(),
            selected: None,
            ids: IdGenerator::new(session_label),
        }
    }

    /// Adopt an existing block list (e.g. a persisted campaign).
    pub fn with_blocks(session_label: &str, blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            selected: None,
            ids: IdGenerator::new(session_label),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: Option<&str>) {
        match id {
            Some(id) if self.index_of(id).is_some() => self.selected = Some(id.to_string()),
            Some(id) => warn!(block_id = %id, "cannot select missing block"),
            None => self.selected = None,
        }
    }

    /// Next unique block id. Ids only move forward, even across undo.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Instantiate a fresh block of `kind` at `index` (clamped) and select
    /// it. Returns the new block's id.
    pub fn add_block(&mut self, kind: &str, index: usize) -> Result<String, RegistryError> {
        let (content, style) = BlockRegistry::default_block(kind)?;
        let id = self.next_id();
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, Block::new(id.clone(), content, style));
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Insert an already-built block at `index` (clamped).
    pub fn insert_block(&mut self, block: Block, index: usize) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Delete a block. Clears selection if it pointed at the block.
    pub fn remove_block(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.blocks.remove(index);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
                true
            }
            None => {
                warn!(block_id = %id, "remove_block: no such block");
                false
            }
        }
    }

    /// Deep-clone a block under a fresh id, insert right after the source,
    /// select the clone. Returns the clone's id.
    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => {
                warn!(block_id = %id, "duplicate_block: no such block");
                return None;
            }
        };

        let mut clone = self.blocks[index].clone();
        clone.id = self.next_id();
        let clone_id = clone.id.clone();
        self.blocks.insert(index + 1, clone);
        self.selected = Some(clone_id.clone());
        Some(clone_id)
    }

    /// Swap with the immediate neighbor; no-op at either end of the list.
    pub fn move_block(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            warn!(block_id = %id, "move_block: no such block");
            return false;
        };

        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.blocks.len() => index + 1,
            _ => return false,
        };
        self.blocks.swap(index, target);
        true
    }

    /// Remove the block and re-insert at `target_index`, compensating for
    /// the removal shift so the block lands where the user dropped it:
    /// moving forward, the effective insertion point is `target_index - 1`.
    pub fn move_block_to_index(&mut self, id: &str, target_index: usize) -> bool {
        let Some(source) = self.index_of(id) else {
            warn!(block_id = %id, "move_block_to_index: no such block");
            return false;
        };

        let target = target_index.min(self.blocks.len());
        let block = self.blocks.remove(source);
        let insert = if source < target { target - 1 } else { target };
        let insert = insert.min(self.blocks.len());
        self.blocks.insert(insert, block);
        insert != source
    }

    /// Merge one field patch into a block. No history commit happens here.
    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            warn!(block_id = %id, "update_block: no such block");
            return false;
        };
        apply_patch(&mut self.blocks[index], patch)
    }

    /// Merge several patches at once (a property-panel "patch object").
    pub fn update_block_many(&mut self, id: &str, patches: Vec<BlockPatch>) -> bool {
        let Some(index) = self.index_of(id) else {
            warn!(block_id = %id, "update_block_many: no such block");
            return false;
        };
        let mut changed = false;
        for patch in patches {
            changed |= apply_patch(&mut self.blocks[index], patch);
        }
        changed
    }

    /// Append a preset's blocks, each freshly id-assigned.
    pub fn add_preset(&mut self, key: &str) -> Result<Vec<String>, RegistryError> {
        self.insert_preset(key, self.blocks.len())
    }

    /// Insert a preset's blocks at `index` (clamped), in preset order.
    pub fn insert_preset(&mut self, key: &str, index: usize) -> Result<Vec<String>, RegistryError> {
        let preset = BlockRegistry::preset(key)?;
        let mut index = index.min(self.blocks.len());
        let mut ids = Vec::with_capacity(preset.blocks.len());
        for (content, style) in preset.blocks {
            let id = self.next_id();
            self.blocks.insert(index, Block::new(id.clone(), content, style));
            ids.push(id);
            index += 1;
        }
        Ok(ids)
    }

    /// Empty the list. Caller is responsible for user confirmation.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.selected = None;
    }

    /// Replace the whole list (undo/redo restore). Selection survives only
    /// if the selected block still exists.
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        if let Some(selected) = &self.selected {
            if !self.blocks.iter().any(|b| &b.id == selected) {
                self.selected = None;
            }
        }
    }
}

fn apply_patch(block: &mut Block, patch: BlockPatch) -> bool {
    match patch {
        BlockPatch::Align(align) => {
            block.style.align = align;
            true
        }
        BlockPatch::Padding(spacing) => {
            block.style.padding = spacing;
            true
        }
        BlockPatch::Margin(spacing) => {
            block.style.margin = spacing;
            true
        }
        BlockPatch::BackgroundColor(color) => {
            block.style.background.set_color(color);
            true
        }
        BlockPatch::BackgroundGradient(gradient) => {
            block.style.background.set_gradient(gradient);
            true
        }
        BlockPatch::BackgroundImage(url) => {
            block.style.background.set_image(url);
            true
        }
        BlockPatch::BackgroundOpacity(opacity) => {
            block.style.background.opacity = opacity.min(100);
            true
        }
        BlockPatch::Border(border) => {
            block.style.border = border;
            true
        }
        BlockPatch::BorderRadius(radius) => {
            block.style.border_radius = radius;
            true
        }
        BlockPatch::Shadow(shadow) => {
            block.style.shadow = shadow;
            true
        }
        BlockPatch::RichText(text) => match block.content.rich_text_mut() {
            Some(slot) => {
                *slot = text;
                true
            }
            None => {
                warn!(block_id = %block.id, kind = %block.kind(), "RichText patch on non-text kind");
                false
            }
        },
        BlockPatch::Src(src) => match &mut block.content {
            BlockContent::Image { src: slot, .. } => {
                *slot = src;
                true
            }
            _ => {
                warn!(block_id = %block.id, kind = %block.kind(), "Src patch on non-image kind");
                false
            }
        },
        BlockPatch::VideoThumbnail(url) => match &mut block.content {
            BlockContent::Video { thumbnail_url, .. } => {
                *thumbnail_url = url;
                true
            }
            _ => {
                warn!(block_id = %block.id, kind = %block.kind(), "VideoThumbnail patch on non-video kind");
                false
            }
        },
        BlockPatch::LinkUrl(url) => match &mut block.content {
            BlockContent::Image { link_url, .. } => {
                *link_url = url;
                true
            }
            BlockContent::Button { url: slot, .. } => {
                *slot = url;
                true
            }
            _ => {
                warn!(block_id = %block.id, kind = %block.kind(), "LinkUrl patch on unsupported kind");
                false
            }
        },
        BlockPatch::Content(content) => {
            block.content = content;
            true
        }
    }
}
