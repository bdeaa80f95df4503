use crate::mvi::UiState;

/// Why a submitted word was rejected.
///
/// Only rules that surface a message to the player appear here; too-short
/// and root-equal submissions are silent no-ops and never produce a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    AlreadyUsed,
    NotPossible,
    NotRecognized,
}

impl RejectReason {
    pub fn title(&self) -> &'static str {
        match self {
            RejectReason::AlreadyUsed => "Word used already",
            RejectReason::NotPossible => "Word not possible",
            RejectReason::NotRecognized => "Word not recognized",
        }
    }

    pub fn message(&self, root: &str) -> String {
        match self {
            RejectReason::AlreadyUsed => "Be more original!".to_string(),
            RejectReason::NotPossible => {
                format!("You can't spell that word from '{}'!", root)
            }
            RejectReason::NotRecognized => {
                "You can't just make them up, you know!".to_string()
            }
        }
    }
}

/// Session state for the word game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrambleState {
    /// Root word the session's derived words must be spelled from.
    pub root: String,
    /// Accepted derived words, most recent first. Each entry is unique.
    pub accepted: Vec<String>,
    /// Running score. Never decreases within a session.
    pub score: u32,
    /// Current text-field contents, raw (not yet normalized).
    pub input: String,
    /// Dismissible rejection notice, if a submission just failed.
    pub notice: Option<RejectReason>,
}

impl UiState for ScrambleState {}

impl ScrambleState {
    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}
