use crate::mvi::UiState;
use crate::quiz::country::Country;

/// How many flags are shown per round.
pub const CANDIDATES: usize = 3;

/// Result of the current round's tap, shown as a dismissible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    /// The player tapped the wrong flag; record which one for display.
    Wrong { tapped: Country },
}

/// Session state for the flag quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    /// Current shuffled ordering of the catalogue. The first
    /// [`CANDIDATES`] entries are this round's displayed flags.
    pub countries: Vec<Country>,
    /// Index of the correct flag, always < [`CANDIDATES`].
    pub correct: usize,
    /// Running score. Never decreases within a session.
    pub score: u32,
    /// Outcome of this round's tap; `None` while awaiting one.
    pub outcome: Option<RoundOutcome>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            countries: Country::ALL.to_vec(),
            correct: 0,
            score: 0,
            outcome: None,
        }
    }
}

impl UiState for QuizState {}

impl QuizState {
    /// This round's displayed flags.
    pub fn candidates(&self) -> &[Country] {
        &self.countries[..CANDIDATES]
    }

    /// Country the player is asked to find.
    pub fn prompted(&self) -> Country {
        self.countries[self.correct]
    }
}
