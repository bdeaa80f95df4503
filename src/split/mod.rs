//! Bill-splitting calculator.
//!
//! Three inputs (amount, party size, tip fraction) and two derived values.
//! The derivations are pure functions recomputed on every render; nothing
//! is stored beyond the inputs.

mod intent;
mod reducer;
mod state;

pub use intent::SplitIntent;
pub use reducer::SplitReducer;
pub use state::{SplitField, SplitState, MAX_PEOPLE, MIN_PEOPLE};

/// Allowed tip fractions, in picker order.
pub const TIP_FRACTIONS: [f64; 6] = [0.0, 0.05, 0.10, 0.15, 0.20, 0.25];

/// Bill total including tip.
pub fn total_with_tip(amount: f64, tip_fraction: f64) -> f64 {
    amount * (1.0 + tip_fraction)
}

/// Per-person share of a total.
pub fn per_person(total: f64, people: u32) -> f64 {
    total / f64::from(people)
}

/// Two-decimal currency display. No rounding policy beyond this.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
