use crate::mvi::Reducer;
use crate::scramble::intent::ScrambleIntent;
use crate::scramble::state::ScrambleState;

/// Longest input the text field will accept.
const MAX_INPUT_LEN: usize = 32;

pub struct ScrambleReducer;

impl Reducer for ScrambleReducer {
    type State = ScrambleState;
    type Intent = ScrambleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScrambleIntent::NewGame { root } => ScrambleState {
                root,
                ..ScrambleState::default()
            },
            ScrambleIntent::InputChar(c) => {
                // The notice blocks typing, same as a modal alert.
                if state.notice.is_some() || state.input.chars().count() >= MAX_INPUT_LEN {
                    return state;
                }
                let mut next = state;
                next.input.push(c);
                next
            }
            ScrambleIntent::Backspace => {
                if state.notice.is_some() {
                    return state;
                }
                let mut next = state;
                next.input.pop();
                next
            }
            ScrambleIntent::Accept { word, points } => {
                let mut next = state;
                next.accepted.insert(0, word);
                next.score += points;
                next.input.clear();
                next.notice = None;
                next
            }
            ScrambleIntent::Reject { reason } => {
                let mut next = state;
                next.notice = Some(reason);
                next
            }
            ScrambleIntent::DismissNotice => {
                let mut next = state;
                next.notice = None;
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scramble::state::RejectReason;

    fn session() -> ScrambleState {
        ScrambleReducer::reduce(
            ScrambleState::default(),
            ScrambleIntent::NewGame {
                root: "silkworm".to_string(),
            },
        )
    }

    #[test]
    fn new_game_resets_everything_but_root() {
        let dirty = ScrambleState {
            root: "oldroot".to_string(),
            accepted: vec!["old".to_string()],
            score: 99,
            input: "pending".to_string(),
            notice: Some(RejectReason::AlreadyUsed),
        };
        let state = ScrambleReducer::reduce(
            dirty,
            ScrambleIntent::NewGame {
                root: "silkworm".to_string(),
            },
        );
        assert_eq!(state.root, "silkworm");
        assert!(state.accepted.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.input.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn accept_pushes_front_and_clears_input() {
        let mut state = session();
        state.input = "worm".to_string();
        state = ScrambleReducer::reduce(
            state,
            ScrambleIntent::Accept {
                word: "worm".to_string(),
                points: 4,
            },
        );
        state.input = "silk".to_string();
        state = ScrambleReducer::reduce(
            state,
            ScrambleIntent::Accept {
                word: "silk".to_string(),
                points: 8,
            },
        );
        assert_eq!(state.accepted, vec!["silk".to_string(), "worm".to_string()]);
        assert_eq!(state.score, 12);
        assert!(state.input.is_empty());
    }

    #[test]
    fn reject_keeps_input_for_editing() {
        let mut state = session();
        state.input = "silkx".to_string();
        let state = ScrambleReducer::reduce(
            state,
            ScrambleIntent::Reject {
                reason: RejectReason::NotPossible,
            },
        );
        assert_eq!(state.notice, Some(RejectReason::NotPossible));
        assert_eq!(state.input, "silkx");
    }

    #[test]
    fn notice_blocks_typing_until_dismissed() {
        let mut state = session();
        state.notice = Some(RejectReason::NotRecognized);
        let state = ScrambleReducer::reduce(state, ScrambleIntent::InputChar('x'));
        assert!(state.input.is_empty());

        let state = ScrambleReducer::reduce(state, ScrambleIntent::DismissNotice);
        let state = ScrambleReducer::reduce(state, ScrambleIntent::InputChar('x'));
        assert_eq!(state.input, "x");
    }

    #[test]
    fn input_length_is_capped() {
        let mut state = session();
        for _ in 0..100 {
            state = ScrambleReducer::reduce(state, ScrambleIntent::InputChar('a'));
        }
        assert_eq!(state.input.chars().count(), 32);
    }
}
