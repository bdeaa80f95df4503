//! Word-derivation game.
//!
//! The player derives words from a session root word. Submissions run
//! through the acceptance rule chain in [`validate`]; accepted words are
//! kept most-recent-first and scored by raw input length times a growing
//! multiplier.

mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::ScrambleIntent;
pub use reducer::ScrambleReducer;
pub use state::{RejectReason, ScrambleState};
pub use validate::{evaluate, is_possible, Verdict};
