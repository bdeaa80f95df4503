use crate::mvi::Reducer;
use crate::split::intent::SplitIntent;
use crate::split::state::{SplitField, SplitState, MAX_PEOPLE, MIN_PEOPLE};
use crate::split::TIP_FRACTIONS;

/// Longest amount the text field will accept.
const MAX_AMOUNT_LEN: usize = 12;

pub struct SplitReducer;

impl Reducer for SplitReducer {
    type State = SplitState;
    type Intent = SplitIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SplitIntent::InputChar(c) => {
                if state.focus != SplitField::Amount {
                    return state;
                }
                if state.amount_input.len() >= MAX_AMOUNT_LEN {
                    return state;
                }
                let valid = c.is_ascii_digit() || (c == '.' && !state.amount_input.contains('.'));
                if !valid {
                    return state;
                }
                let mut next = state;
                next.amount_input.push(c);
                next
            }
            SplitIntent::Backspace => {
                if state.focus != SplitField::Amount {
                    return state;
                }
                let mut next = state;
                next.amount_input.pop();
                next
            }
            SplitIntent::FocusNext => {
                let mut next = state;
                next.focus = match next.focus {
                    SplitField::Amount => SplitField::People,
                    SplitField::People => SplitField::Tip,
                    SplitField::Tip => SplitField::Amount,
                };
                next
            }
            SplitIntent::FocusPrev => {
                let mut next = state;
                next.focus = match next.focus {
                    SplitField::Amount => SplitField::Tip,
                    SplitField::People => SplitField::Amount,
                    SplitField::Tip => SplitField::People,
                };
                next
            }
            SplitIntent::Increase => {
                let mut next = state;
                match next.focus {
                    SplitField::Amount => {}
                    SplitField::People => {
                        next.people = (next.people + 1).min(MAX_PEOPLE);
                    }
                    SplitField::Tip => {
                        next.tip_index = (next.tip_index + 1) % TIP_FRACTIONS.len();
                    }
                }
                next
            }
            SplitIntent::Decrease => {
                let mut next = state;
                match next.focus {
                    SplitField::Amount => {}
                    SplitField::People => {
                        next.people = next.people.saturating_sub(1).max(MIN_PEOPLE);
                    }
                    SplitField::Tip => {
                        next.tip_index = if next.tip_index == 0 {
                            TIP_FRACTIONS.len() - 1
                        } else {
                            next.tip_index - 1
                        };
                    }
                }
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_focus(focus: SplitField) -> SplitState {
        SplitState {
            focus,
            ..SplitState::default()
        }
    }

    fn type_amount(mut state: SplitState, text: &str) -> SplitState {
        for c in text.chars() {
            state = SplitReducer::reduce(state, SplitIntent::InputChar(c));
        }
        state
    }

    #[test]
    fn amount_accepts_digits_and_single_dot() {
        let state = type_amount(SplitState::default(), "100.0.5x");
        assert_eq!(state.amount_input, "100.05");
        assert_eq!(state.amount(), 100.05);
    }

    #[test]
    fn empty_amount_reads_as_zero() {
        assert_eq!(SplitState::default().amount(), 0.0);
    }

    #[test]
    fn typing_is_ignored_when_amount_not_focused() {
        let state = type_amount(with_focus(SplitField::People), "42");
        assert!(state.amount_input.is_empty());
    }

    #[test]
    fn people_stays_within_bounds() {
        let mut state = with_focus(SplitField::People);
        for _ in 0..200 {
            state = SplitReducer::reduce(state, SplitIntent::Increase);
        }
        assert_eq!(state.people, MAX_PEOPLE);
        for _ in 0..200 {
            state = SplitReducer::reduce(state, SplitIntent::Decrease);
        }
        assert_eq!(state.people, MIN_PEOPLE);
    }

    #[test]
    fn tip_cycles_through_fixed_set() {
        let mut state = with_focus(SplitField::Tip);
        assert_eq!(state.tip_fraction(), 0.10);
        for _ in 0..TIP_FRACTIONS.len() {
            state = SplitReducer::reduce(state, SplitIntent::Increase);
        }
        assert_eq!(state.tip_fraction(), 0.10);

        let state = SplitReducer::reduce(with_focus(SplitField::Tip), SplitIntent::Decrease);
        assert_eq!(state.tip_fraction(), 0.05);
    }

    #[test]
    fn focus_cycles_both_directions() {
        let state = SplitState::default();
        let state = SplitReducer::reduce(state, SplitIntent::FocusNext);
        assert_eq!(state.focus, SplitField::People);
        let state = SplitReducer::reduce(state, SplitIntent::FocusNext);
        assert_eq!(state.focus, SplitField::Tip);
        let state = SplitReducer::reduce(state, SplitIntent::FocusNext);
        assert_eq!(state.focus, SplitField::Amount);
        let state = SplitReducer::reduce(state, SplitIntent::FocusPrev);
        assert_eq!(state.focus, SplitField::Tip);
    }
}
