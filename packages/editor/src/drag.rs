//! # Drag Controller
//!
//! Session state machine translating pointer drags into store mutations.
//!
//! One session at a time: starting a new drag implicitly cancels any prior
//! incomplete one. The `drop_index` hint tracks the drop zone under the
//! pointer; leaving the canvas clears the hint but keeps the session alive,
//! since the pointer may re-enter before release.

use tracing::debug;

/// What is being dragged out of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteItem {
    /// A single block kind.
    Kind(String),
    /// A named preset group.
    Preset(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    FromPalette(PaletteItem),
    Block {
        id: String,
    },
}

/// The store mutation a completed drop resolves to. `index` is `None` when
/// the drop happened without a hint (append to the end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    Insert { kind: String, index: Option<usize> },
    InsertPreset { key: String, index: Option<usize> },
    Move { id: String, index: Option<usize> },
}

#[derive(Debug, Default)]
pub struct DragController {
    session: DragSession,
    drop_index: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session != DragSession::Idle
    }

    pub fn drop_index(&self) -> Option<usize> {
        self.drop_index
    }

    pub fn start_palette_drag(&mut self, item: PaletteItem) {
        self.replace_session(DragSession::FromPalette(item));
    }

    pub fn start_block_drag(&mut self, id: impl Into<String>) {
        self.replace_session(DragSession::Block { id: id.into() });
    }

    fn replace_session(&mut self, session: DragSession) {
        if self.is_active() {
            debug!(?session, "new drag cancels incomplete session");
        }
        self.session = session;
        self.drop_index = None;
    }

    /// Update the drop-zone hint as the pointer moves. Ignored while idle.
    pub fn set_drop_index(&mut self, index: Option<usize>) {
        if self.is_active() {
            self.drop_index = index;
        }
    }

    /// Pointer left the canvas: clear the hint, keep the session.
    pub fn leave_canvas(&mut self) {
        self.drop_index = None;
    }

    pub fn cancel(&mut self) {
        self.session = DragSession::Idle;
        self.drop_index = None;
    }

    /// Complete the session, resolving it to a store mutation. `None` when
    /// no drag was active.
    pub fn complete_drop(&mut self) -> Option<DropAction> {
        let index = self.drop_index.take();
        let action = match std::mem::take(&mut self.session) {
            DragSession::Idle => return None,
            DragSession::FromPalette(PaletteItem::Kind(kind)) => DropAction::Insert { kind, index },
            DragSession::FromPalette(PaletteItem::Preset(key)) => {
                DropAction::InsertPreset { key, index }
            }
            DragSession::Block { id } => DropAction::Move { id, index },
        };
        debug!(?action, "drag session completed");
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_drop_resolves_to_insert() {
        let mut drag = DragController::new();
        drag.start_palette_drag(PaletteItem::Kind("button".to_string()));
        drag.set_drop_index(Some(2));

        assert_eq!(
            drag.complete_drop(),
            Some(DropAction::Insert {
                kind: "button".to_string(),
                index: Some(2),
            })
        );
        assert!(!drag.is_active());
    }

    #[test]
    fn test_block_drop_resolves_to_move() {
        let mut drag = DragController::new();
        drag.start_block_drag("s-3");
        drag.set_drop_index(Some(0));

        assert_eq!(
            drag.complete_drop(),
            Some(DropAction::Move {
                id: "s-3".to_string(),
                index: Some(0),
            })
        );
    }

    #[test]
    fn test_new_drag_cancels_previous_session() {
        let mut drag = DragController::new();
        drag.start_block_drag("s-3");
        drag.set_drop_index(Some(4));

        drag.start_palette_drag(PaletteItem::Preset("newsletter".to_string()));

        // The old hint must not leak into the new session.
        assert_eq!(drag.drop_index(), None);
        assert_eq!(
            drag.complete_drop(),
            Some(DropAction::InsertPreset {
                key: "newsletter".to_string(),
                index: None,
            })
        );
    }

    #[test]
    fn test_leaving_canvas_keeps_session() {
        let mut drag = DragController::new();
        drag.start_palette_drag(PaletteItem::Kind("text".to_string()));
        drag.set_drop_index(Some(1));

        drag.leave_canvas();
        assert!(drag.is_active());
        assert_eq!(drag.drop_index(), None);

        // Re-entry picks a new zone.
        drag.set_drop_index(Some(0));
        assert_eq!(drag.drop_index(), Some(0));
    }

    #[test]
    fn test_drop_without_session_is_none() {
        let mut drag = DragController::new();
        assert_eq!(drag.complete_drop(), None);
    }

    #[test]
    fn test_hint_ignored_while_idle() {
        let mut drag = DragController::new();
        drag.set_drop_index(Some(5));
        assert_eq!(drag.drop_index(), None);
    }
}
