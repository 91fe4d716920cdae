//! Keyboard shortcuts
//!
//! Each Ctrl-combo maps 1:1 to a controller action:
//!
//! | Combo  | Action |
//! |--------|--------|
//! | Ctrl+Z | Undo the last two plies |
//! | Ctrl+R | Reset to the starting position |
//! | Ctrl+M | Flip the board and switch sides |

/// Keys the controller cares about; everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Z,
    R,
    M,
    Other(char),
}

/// Controller actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Undo,
    Reset,
    Flip,
}

impl Shortcut {
    /// Plain keys without Ctrl never trigger a shortcut.
    pub fn from_key(key: Key, ctrl: bool) -> Option<Shortcut> {
        if !ctrl {
            return None;
        }
        match key {
            Key::Z => Some(Shortcut::Undo),
            Key::R => Some(Shortcut::Reset),
            Key::M => Some(Shortcut::Flip),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_need_ctrl() {
        assert_eq!(Shortcut::from_key(Key::Z, true), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_key(Key::R, true), Some(Shortcut::Reset));
        assert_eq!(Shortcut::from_key(Key::M, true), Some(Shortcut::Flip));
        assert_eq!(Shortcut::from_key(Key::Z, false), None);
        assert_eq!(Shortcut::from_key(Key::Other('x'), true), None);
    }
}
