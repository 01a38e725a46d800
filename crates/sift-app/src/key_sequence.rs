//! Two-key fold commands (`za`, `zA`, `zR`...).
//!
//! The last keys typed sit in a ring buffer that is matched against a fixed
//! binding table after every key press.

use crate::input_key::InputKey;

/// Number of keys remembered
pub const SEQUENCE_LEN: usize = 2;

/// Fold commands reachable through key sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldCommand {
    ToggleOne,
    ExpandOne,
    CollapseOne,
    ToggleRecursive,
    ExpandAll,
    CollapseAll,
}

/// Sequence bindings, oldest key first
pub const FOLD_BINDINGS: [([char; SEQUENCE_LEN], FoldCommand); 6] = [
    (['z', 'a'], FoldCommand::ToggleOne),
    (['z', 'o'], FoldCommand::ExpandOne),
    (['z', 'c'], FoldCommand::CollapseOne),
    (['z', 'A'], FoldCommand::ToggleRecursive),
    (['z', 'R'], FoldCommand::ExpandAll),
    (['z', 'M'], FoldCommand::CollapseAll),
];

#[derive(Debug, Clone, Default)]
pub struct KeySequence {
    keys: [Option<InputKey>; SEQUENCE_LEN],
}

impl KeySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the buffer left and append `key`
    pub fn push(&mut self, key: InputKey) {
        self.keys.rotate_left(1);
        self.keys[SEQUENCE_LEN - 1] = Some(key);
    }

    pub fn clear(&mut self) {
        self.keys = [None; SEQUENCE_LEN];
    }

    /// Command bound to the buffered keys, if any
    pub fn matched(&self) -> Option<FoldCommand> {
        let typed: Vec<char> = self
            .keys
            .iter()
            .filter_map(|k| k.and_then(|k| k.as_char()))
            .collect();
        if typed.len() != SEQUENCE_LEN {
            return None;
        }
        FOLD_BINDINGS
            .iter()
            .find(|(keys, _)| keys[..] == typed[..])
            .map(|(_, command)| *command)
    }
}
