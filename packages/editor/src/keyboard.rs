//! Keyboard shortcut surface.
//!
//! Active only when no text field has focus; the engine gates dispatch on
//! the inline-edit session. Ctrl and Cmd are equivalent (`ctrl_or_cmd`).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl_or_cmd: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl_or_cmd: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl_or_cmd: true,
        shift: false,
        alt: false,
    };

    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl_or_cmd: true,
        shift: true,
        alt: false,
    };

    pub const ALT: Modifiers = Modifiers {
        ctrl_or_cmd: false,
        shift: false,
        alt: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RemoveSelected,
    /// Close the edit session if one is open, otherwise clear selection.
    Escape,
    Undo,
    Redo,
    CopySelected,
    Paste,
    DuplicateSelected,
    MoveSelectedUp,
    MoveSelectedDown,
}

/// Map a key event to an editor command. Keys use DOM `KeyboardEvent.key`
/// names; letters match case-insensitively.
pub fn command_for(key: &str, mods: Modifiers) -> Option<Command> {
    if mods.ctrl_or_cmd {
        let letter = single_letter(key)?;
        return match (letter, mods.shift) {
            ('z', false) => Some(Command::Undo),
            ('z', true) => Some(Command::Redo),
            ('c', false) => Some(Command::CopySelected),
            ('v', false) => Some(Command::Paste),
            ('d', false) => Some(Command::DuplicateSelected),
            _ => None,
        };
    }

    if mods.alt {
        return match key {
            "ArrowUp" => Some(Command::MoveSelectedUp),
            "ArrowDown" => Some(Command::MoveSelectedDown),
            _ => None,
        };
    }

    match key {
        "Delete" | "Backspace" => Some(Command::RemoveSelected),
        "Escape" => Some(Command::Escape),
        _ => None,
    }
}

fn single_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(first.to_ascii_lowercase())
}
