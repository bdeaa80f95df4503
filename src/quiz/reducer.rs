use crate::mvi::Reducer;
use crate::quiz::intent::QuizIntent;
use crate::quiz::state::{QuizState, RoundOutcome, CANDIDATES};

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::BeginRound { countries, correct } => {
                // Malformed rounds are dropped rather than displayed.
                if countries.len() < CANDIDATES || correct >= CANDIDATES {
                    return state;
                }
                QuizState {
                    countries,
                    correct,
                    outcome: None,
                    score: state.score,
                }
            }
            QuizIntent::Tap { index } => {
                // One tap per round; further taps wait for the notice.
                if state.outcome.is_some() || index >= CANDIDATES {
                    return state;
                }
                let mut next = state;
                if index == next.correct {
                    next.score += 1;
                    next.outcome = Some(RoundOutcome::Correct);
                } else {
                    next.outcome = Some(RoundOutcome::Wrong {
                        tapped: next.countries[index],
                    });
                }
                next
            }
            QuizIntent::DismissOutcome => {
                let mut next = state;
                next.outcome = None;
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::country::Country;

    fn round(correct: usize) -> QuizState {
        QuizReducer::reduce(
            QuizState::default(),
            QuizIntent::BeginRound {
                countries: Country::ALL.to_vec(),
                correct,
            },
        )
    }

    #[test]
    fn correct_tap_scores_exactly_one() {
        let state = round(1);
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 1 });
        assert_eq!(state.score, 1);
        assert_eq!(state.outcome, Some(RoundOutcome::Correct));
    }

    #[test]
    fn wrong_tap_records_tapped_country() {
        let state = round(0);
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 2 });
        assert_eq!(state.score, 0);
        assert_eq!(
            state.outcome,
            Some(RoundOutcome::Wrong {
                tapped: Country::ALL[2]
            })
        );
    }

    #[test]
    fn second_tap_in_same_round_is_ignored() {
        let state = round(0);
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 0 });
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 0 });
        assert_eq!(state.score, 1);
    }

    #[test]
    fn out_of_range_tap_is_ignored() {
        let state = round(0);
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 3 });
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn begin_round_keeps_score_and_clears_outcome() {
        let state = round(0);
        let state = QuizReducer::reduce(state, QuizIntent::Tap { index: 0 });
        assert_eq!(state.score, 1);

        let state = QuizReducer::reduce(
            state,
            QuizIntent::BeginRound {
                countries: Country::ALL.to_vec(),
                correct: 2,
            },
        );
        assert_eq!(state.score, 1);
        assert_eq!(state.outcome, None);
        assert_eq!(state.correct, 2);
    }

    #[test]
    fn malformed_round_is_dropped() {
        let state = round(0);
        let next = QuizReducer::reduce(
            state.clone(),
            QuizIntent::BeginRound {
                countries: Country::ALL.to_vec(),
                correct: 3,
            },
        );
        assert_eq!(next, state);
    }
}
