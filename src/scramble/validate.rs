//! Word-acceptance rules.
//!
//! Rules are evaluated in order; the first failing rule determines the
//! outcome. Too-short and root-equal submissions are silent no-ops, the
//! remaining rejections carry a [`RejectReason`] for display.

use std::collections::HashMap;

use crate::dict::SpellChecker;
use crate::scramble::state::RejectReason;

/// Outcome of running a submission through the acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Submission is ignored entirely (no error, no state change).
    Ignored,
    /// Submission failed a rule that surfaces a message.
    Rejected(RejectReason),
    /// Submission passed every rule.
    Accepted {
        /// Normalized word to record.
        word: String,
        /// Points awarded: raw input length x (1 + words already accepted).
        points: u32,
    },
}

/// Evaluate a raw submission against the current session.
///
/// `accepted` is the list of already-accepted (normalized) words. Scoring
/// deliberately uses the raw input's character count, not the normalized
/// word's, matching the game's original scoring.
pub fn evaluate(
    raw: &str,
    root: &str,
    accepted: &[String],
    checker: &dyn SpellChecker,
    language: &str,
) -> Verdict {
    let answer = raw.trim().to_lowercase();

    if answer.chars().count() <= 2 {
        return Verdict::Ignored;
    }

    if answer == root {
        return Verdict::Ignored;
    }

    if accepted.iter().any(|word| word == &answer) {
        return Verdict::Rejected(RejectReason::AlreadyUsed);
    }

    if !is_possible(&answer, root) {
        return Verdict::Rejected(RejectReason::NotPossible);
    }

    if !checker.check(&answer, language) {
        return Verdict::Rejected(RejectReason::NotRecognized);
    }

    let points = raw.chars().count() as u32 * (accepted.len() as u32 + 1);
    Verdict::Accepted {
        word: answer,
        points,
    }
}

/// True iff every letter of `candidate` can be matched to a distinct,
/// unused occurrence of the same letter in `root` (multiset containment).
///
/// Each root letter is consumable at most once per occurrence: a candidate
/// that reuses a letter more times than the root contains it is rejected.
pub fn is_possible(candidate: &str, root: &str) -> bool {
    let mut available: HashMap<char, u32> = HashMap::new();
    for letter in root.chars() {
        *available.entry(letter).or_insert(0) += 1;
    }

    for letter in candidate.chars() {
        match available.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
