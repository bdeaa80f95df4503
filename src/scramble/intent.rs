use crate::mvi::Intent;
use crate::scramble::state::RejectReason;

/// Word game intents.
///
/// `Accept` and `Reject` carry a verdict already computed by the shell
/// (dictionary lookups are effectful, so they happen outside the reducer).
#[derive(Debug, Clone)]
pub enum ScrambleIntent {
    /// Start a new session with the given root word. Clears everything.
    NewGame { root: String },
    /// Append a character to the input buffer.
    InputChar(char),
    /// Remove the last character from the input buffer.
    Backspace,
    /// Record an accepted word and award its points.
    Accept { word: String, points: u32 },
    /// Surface a rejection notice. The input buffer is left as-is so the
    /// player can fix the word.
    Reject { reason: RejectReason },
    /// Dismiss the rejection notice.
    DismissNotice,
}

impl Intent for ScrambleIntent {}
