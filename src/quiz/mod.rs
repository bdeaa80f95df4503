//! Flag-guessing quiz.
//!
//! Each round shuffles the country catalogue and shows the first three
//! flags; the player taps the one matching the prompted country. A correct
//! tap is worth one point.

mod country;
mod intent;
mod reducer;
mod state;

pub use country::Country;
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{QuizState, RoundOutcome, CANDIDATES};
