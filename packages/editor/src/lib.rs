//! # Mailforge Editor
//!
//! Mutable editing core for the email builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: model + registry defaults           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: one editing session                 │
//! │  - BlockStore: ordered blocks + selection   │
//! │  - HistoryStack: snapshot undo/redo         │
//! │  - DragController: palette/reorder drags    │
//! │  - Clipboard: single-slot copy/paste        │
//! │  - EmailEngine: facade + outward callbacks  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: blocks → email document      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The block list is source of truth**: HTML is a derived view
//! 2. **Explicit state**: store, history, and clipboard are plain values
//!    owned by one engine instance, never process-wide
//! 3. **Commit is deliberate**: live property edits stay out of history
//!    until the host calls `commit()`
//! 4. **Synchronous**: every operation runs to completion before the next
//!    user event; upload completions re-enter through the same path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailforge_editor::EmailEngine;
//!
//! let mut engine = EmailEngine::new("campaign-42");
//! engine.set_on_change(|html| persist_html(html));
//!
//! let id = engine.add_block("button", 0)?;
//! engine.undo();
//! engine.redo();
//! ```

mod clipboard;
mod drag;
mod errors;
mod history;
mod keyboard;
mod session;
mod store;

pub use clipboard::Clipboard;
pub use drag::{DragController, DragSession, DropAction, PaletteItem};
pub use errors::EditorError;
pub use history::{HistoryStack, MAX_SNAPSHOTS};
pub use keyboard::{command_for, Command, Modifiers};
pub use session::{EditSession, EmailEngine, InitialContent, SettingsPatch, UploadTarget};
pub use store::{BlockPatch, BlockStore, MoveDirection};

// Re-export the model for convenience
pub use mailforge_blocks::{Block, BlockContent, BlockRegistry, BlockStyle, EmailSettings};
