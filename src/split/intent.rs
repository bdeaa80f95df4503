use crate::mvi::Intent;

/// Bill splitter intents.
#[derive(Debug, Clone, Copy)]
pub enum SplitIntent {
    /// Type into the amount field (ignored unless it has focus).
    InputChar(char),
    /// Delete from the amount field.
    Backspace,
    /// Move focus to the next input.
    FocusNext,
    /// Move focus to the previous input.
    FocusPrev,
    /// Step the focused picker up (people +1, next tip fraction).
    Increase,
    /// Step the focused picker down.
    Decrease,
}

impl Intent for SplitIntent {}
