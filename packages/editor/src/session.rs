//! # Email Engine
//!
//! Facade owning one editing session: store, history, clipboard, drag
//! controller, global settings, and the inline text-edit session. After
//! every committed mutation the outward callbacks fire with the serialized
//! document and the raw block list, so the host can persist either.

use crate::clipboard::Clipboard;
use crate::drag::{DragController, DropAction, PaletteItem};
use crate::errors::EditorError;
use crate::history::HistoryStack;
use crate::keyboard::{command_for, Command, Modifiers};
use crate::store::{BlockPatch, BlockStore, MoveDirection};
use mailforge_blocks::{Block, EmailSettings};
use mailforge_compiler_html::serialize_document;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What the host seeds a new engine with. An HTML string is accepted for
/// interface compatibility but not parsed (HTML-to-blocks is out of scope),
/// so it behaves like starting empty.
#[derive(Debug, Clone)]
pub enum InitialContent {
    Blocks(Vec<Block>),
    Html(String),
    Empty,
}

/// One field update to the global email settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsPatch {
    BackgroundColor(String),
    ContentBackground(String),
    ContentWidth(u32),
    FontFamily(String),
}

/// Which field an asynchronous image upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadTarget {
    ImageSrc,
    BackgroundImage,
    VideoThumbnail,
}

/// Inline text editing scoped to one block. Only one session exists at a
/// time; the draft lives here until committed back through the ordinary
/// property-update path.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub block_id: String,
    pub draft: String,
}

type HtmlCallback = Box<dyn FnMut(&str)>;
type BlocksCallback = Box<dyn FnMut(&[Block])>;

pub struct EmailEngine {
    store: BlockStore,
    history: HistoryStack,
    clipboard: Clipboard,
    drag: DragController,
    settings: EmailSettings,
    edit_session: Option<EditSession>,
    on_change: Option<HtmlCallback>,
    on_blocks_change: Option<BlocksCallback>,
}

impl EmailEngine {
    pub fn new(session_label: &str) -> Self {
        Self::with_blocks(session_label, Vec::new())
    }

    pub fn with_blocks(session_label: &str, blocks: Vec<Block>) -> Self {
        let history = HistoryStack::new(blocks.clone());
        Self {
            store: BlockStore::with_blocks(session_label, blocks),
            history,
            clipboard: Clipboard::new(),
            drag: DragController::new(),
            settings: EmailSettings::default(),
            edit_session: None,
            on_change: None,
            on_blocks_change: None,
        }
    }

    pub fn from_initial(session_label: &str, initial: InitialContent) -> Self {
        match initial {
            InitialContent::Blocks(blocks) => Self::with_blocks(session_label, blocks),
            InitialContent::Html(_) => {
                debug!("initial HTML is not parsed back into blocks; starting empty");
                Self::new(session_label)
            }
            InitialContent::Empty => Self::new(session_label),
        }
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn set_on_blocks_change(&mut self, callback: impl FnMut(&[Block]) + 'static) {
        self.on_blocks_change = Some(Box::new(callback));
    }

    pub fn blocks(&self) -> &[Block] {
        self.store.blocks()
    }

    pub fn settings(&self) -> &EmailSettings {
        &self.settings
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.store.selected_id()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Serialize the current document.
    pub fn html(&self) -> String {
        serialize_document(self.store.blocks(), &self.settings)
    }

    /// Select a block (or clear the selection). Switching away from a block
    /// with an open text-edit session commits that session first.
    pub fn select(&mut self, id: Option<&str>) {
        let switching = self
            .edit_session
            .as_ref()
            .is_some_and(|session| id != Some(session.block_id.as_str()));
        if switching {
            self.end_text_edit();
        }
        self.store.select(id);
    }

    /// Record a history snapshot of the current state and notify the host.
    /// Called by the host on blur/mouse-up after live property edits; all
    /// structural mutations call it internally.
    pub fn commit(&mut self) {
        if self.history.commit(self.store.blocks()) {
            debug!(blocks = self.store.len(), "committed snapshot");
            self.notify();
        }
    }

    fn notify(&mut self) {
        if let Some(callback) = &mut self.on_change {
            let html = serialize_document(self.store.blocks(), &self.settings);
            callback(&html);
        }
        if let Some(callback) = &mut self.on_blocks_change {
            callback(self.store.blocks());
        }
    }

    // ─── Structural mutations (each commits) ───

    pub fn add_block(&mut self, kind: &str, index: usize) -> Result<String, EditorError> {
        let id = self.store.add_block(kind, index)?;
        self.commit();
        Ok(id)
    }

    pub fn remove_block(&mut self, id: &str) {
        // A pending draft for the removed block dies with it.
        if self
            .edit_session
            .as_ref()
            .is_some_and(|session| session.block_id == id)
        {
            self.edit_session = None;
        }
        if self.store.remove_block(id) {
            self.commit();
        }
    }

    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let clone_id = self.store.duplicate_block(id)?;
        self.commit();
        Some(clone_id)
    }

    pub fn move_block(&mut self, id: &str, direction: MoveDirection) {
        if self.store.move_block(id, direction) {
            self.commit();
        }
    }

    pub fn move_block_to_index(&mut self, id: &str, target_index: usize) {
        if self.store.move_block_to_index(id, target_index) {
            self.commit();
        }
    }

    pub fn add_preset(&mut self, key: &str) -> Result<Vec<String>, EditorError> {
        let ids = self.store.add_preset(key)?;
        self.commit();
        Ok(ids)
    }

    pub fn insert_preset(&mut self, key: &str, index: usize) -> Result<Vec<String>, EditorError> {
        let ids = self.store.insert_preset(key, index)?;
        self.commit();
        Ok(ids)
    }

    /// Empty the document. The calling layer obtains user confirmation.
    pub fn clear(&mut self) {
        if !self.store.is_empty() {
            self.store.clear();
            self.commit();
        }
    }

    // ─── Live property edits (no commit until `commit()`) ───

    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> bool {
        self.store.update_block(id, patch)
    }

    pub fn update_block_many(&mut self, id: &str, patches: Vec<BlockPatch>) -> bool {
        self.store.update_block_many(id, patches)
    }

    // ─── Settings ───

    /// Apply a settings patch. Settings live beside the block list and are
    /// not part of history snapshots; the host only exposes the settings
    /// panel while no block is selected.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        match patch {
            SettingsPatch::BackgroundColor(color) => self.settings.background_color = color,
            SettingsPatch::ContentBackground(color) => self.settings.content_background = color,
            SettingsPatch::ContentWidth(width) => self.settings.content_width = width,
            SettingsPatch::FontFamily(font) => self.settings.font_family = font,
        }
        self.notify();
    }

    // ─── History ───

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.edit_session = None;
                self.store.replace_blocks(state);
                self.notify();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.edit_session = None;
                self.store.replace_blocks(state);
                self.notify();
                true
            }
            None => false,
        }
    }

    // ─── Clipboard ───

    pub fn copy_block(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(block) => {
                self.clipboard.copy(block);
                true
            }
            None => {
                warn!(block_id = %id, "copy_block: no such block");
                false
            }
        }
    }

    /// Paste the stored block right after the selection (or at the end),
    /// under a fresh id. The slot is kept, so paste repeats.
    pub fn paste(&mut self) -> Option<String> {
        let mut block = self.clipboard.block()?.clone();
        block.id = self.store.next_id();
        let id = block.id.clone();

        let index = self
            .selected_id()
            .and_then(|selected| self.store.index_of(selected))
            .map(|i| i + 1)
            .unwrap_or(self.store.len());

        self.store.insert_block(block, index);
        self.store.select(Some(id.as_str()));
        self.commit();
        Some(id)
    }

    // ─── Drag and drop ───

    pub fn start_palette_drag(&mut self, item: PaletteItem) {
        self.drag.start_palette_drag(item);
    }

    pub fn start_block_drag(&mut self, id: &str) {
        self.drag.start_block_drag(id);
    }

    pub fn set_drop_index(&mut self, index: Option<usize>) {
        self.drag.set_drop_index(index);
    }

    pub fn leave_canvas(&mut self) {
        self.drag.leave_canvas();
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Complete the active drag session, applying the resulting mutation.
    pub fn finish_drop(&mut self) -> Result<(), EditorError> {
        let Some(action) = self.drag.complete_drop() else {
            return Ok(());
        };

        let end = self.store.len();
        match action {
            DropAction::Insert { kind, index } => {
                self.add_block(&kind, index.unwrap_or(end))?;
            }
            DropAction::InsertPreset { key, index } => {
                self.insert_preset(&key, index.unwrap_or(end))?;
            }
            DropAction::Move { id, index } => {
                self.move_block_to_index(&id, index.unwrap_or(end));
            }
        }
        Ok(())
    }

    // ─── Inline text editing ───

    /// Open an edit session for a block. Any session open on another block
    /// is committed and closed first; two simultaneous sessions are not a
    /// valid state.
    pub fn begin_text_edit(&mut self, id: &str) -> bool {
        if self
            .edit_session
            .as_ref()
            .is_some_and(|session| session.block_id != id)
        {
            self.end_text_edit();
        }

        let Some(block) = self.store.get(id) else {
            warn!(block_id = %id, "begin_text_edit: no such block");
            return false;
        };

        let draft = block.content.rich_text().unwrap_or_default().to_string();
        self.edit_session = Some(EditSession {
            block_id: id.to_string(),
            draft,
        });
        true
    }

    /// Replace the draft. Does not touch the block or history; keystrokes
    /// must not flood the undo stack.
    pub fn update_draft(&mut self, draft: &str) {
        if let Some(session) = &mut self.edit_session {
            session.draft = draft.to_string();
        }
    }

    /// Close the session, writing the draft back through the ordinary
    /// property-update + commit path.
    pub fn end_text_edit(&mut self) {
        if let Some(session) = self.edit_session.take() {
            self.store
                .update_block(&session.block_id, BlockPatch::RichText(session.draft));
            self.commit();
        }
    }

    /// Close the session, discarding the draft.
    pub fn cancel_text_edit(&mut self) {
        self.edit_session = None;
    }

    // ─── Uploads ───

    /// Entry point for the host's fire-and-forget image upload completing.
    /// A late completion for a deleted block no-ops safely; a failed upload
    /// is surfaced and leaves the block untouched.
    pub fn finish_upload(
        &mut self,
        block_id: &str,
        target: UploadTarget,
        result: Result<String, String>,
    ) -> Result<(), EditorError> {
        let url = result.map_err(|reason| EditorError::Upload {
            block_id: block_id.to_string(),
            reason,
        })?;

        if self.store.get(block_id).is_none() {
            warn!(block_id = %block_id, "upload finished for a deleted block; ignoring");
            return Ok(());
        }

        let patch = match target {
            UploadTarget::ImageSrc => BlockPatch::Src(url),
            UploadTarget::BackgroundImage => BlockPatch::BackgroundImage(url),
            UploadTarget::VideoThumbnail => BlockPatch::VideoThumbnail(url),
        };
        if self.store.update_block(block_id, patch) {
            self.commit();
        }
        Ok(())
    }

    // ─── Keyboard ───

    /// Dispatch a key event. Returns `true` when the engine consumed it.
    /// While a text-edit session is open only Escape is handled; everything
    /// else belongs to the focused text field.
    pub fn handle_key(&mut self, key: &str, mods: Modifiers) -> bool {
        if self.edit_session.is_some() {
            if command_for(key, mods) == Some(Command::Escape) {
                self.end_text_edit();
                return true;
            }
            return false;
        }

        let Some(command) = command_for(key, mods) else {
            return false;
        };

        match command {
            Command::RemoveSelected => {
                if let Some(id) = self.selected_id().map(String::from) {
                    self.remove_block(&id);
                }
            }
            Command::Escape => self.store.select(None),
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::CopySelected => {
                if let Some(id) = self.selected_id().map(String::from) {
                    self.copy_block(&id);
                }
            }
            Command::Paste => {
                self.paste();
            }
            Command::DuplicateSelected => {
                if let Some(id) = self.selected_id().map(String::from) {
                    self.duplicate_block(&id);
                }
            }
            Command::MoveSelectedUp => {
                if let Some(id) = self.selected_id().map(String::from) {
                    self.move_block(&id, MoveDirection::Up);
                }
            }
            Command::MoveSelectedDown => {
                if let Some(id) = self.selected_id().map(String::from) {
                    self.move_block(&id, MoveDirection::Down);
                }
            }
        }
        true
    }
}
