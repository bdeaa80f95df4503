use crate::mvi::Intent;
use crate::quiz::country::Country;

/// Flag quiz intents.
///
/// `BeginRound` carries a pre-shuffled catalogue and correct index so the
/// reducer stays pure; the shell computes both via its random source.
#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// Start a new round. Keeps the running score.
    BeginRound {
        countries: Vec<Country>,
        correct: usize,
    },
    /// Tap the flag at the given candidate index.
    Tap { index: usize },
    /// Dismiss the round-outcome notice.
    DismissOutcome,
}

impl Intent for QuizIntent {}
