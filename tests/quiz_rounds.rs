mod common;

use parlor::mvi::Reducer;
use parlor::quiz::{Country, QuizIntent, QuizReducer, QuizState, RoundOutcome, CANDIDATES};
use parlor::rng::{self, RandomSource};

use common::ScriptedRng;

fn begin(state: QuizState, rng: &mut dyn RandomSource) -> QuizState {
    let mut countries = state.countries.clone();
    rng::shuffle(&mut countries, rng);
    let correct = rng.pick(CANDIDATES);
    QuizReducer::reduce(state, QuizIntent::BeginRound { countries, correct })
}

#[test]
fn correct_index_always_points_at_displayed_candidate() {
    let mut rng = ScriptedRng::new(vec![4, 1, 7, 2, 0, 3, 5, 9, 6, 8, 2]);
    let mut state = QuizState::default();
    for _ in 0..10 {
        state = begin(state, &mut rng);
        assert!(state.correct < CANDIDATES);
        let prompted = state.prompted();
        assert!(state.candidates().contains(&prompted));
    }
}

#[test]
fn tapping_the_correct_index_scores_exactly_one_per_round() {
    let mut rng = ScriptedRng::zeros();
    let mut state = QuizState::default();
    for round in 1..=5u32 {
        state = begin(state, &mut rng);
        let correct = state.correct;
        state = QuizReducer::reduce(state, QuizIntent::Tap { index: correct });
        assert_eq!(state.outcome, Some(RoundOutcome::Correct));
        assert_eq!(state.score, round);
        // Repeated taps in the same round never add points.
        state = QuizReducer::reduce(state, QuizIntent::Tap { index: correct });
        assert_eq!(state.score, round);
        state = QuizReducer::reduce(state, QuizIntent::DismissOutcome);
    }
}

#[test]
fn wrong_tap_names_the_tapped_country_and_keeps_score() {
    let mut rng = ScriptedRng::zeros();
    let state = begin(QuizState::default(), &mut rng);
    let wrong_index = (state.correct + 1) % CANDIDATES;
    let expected = state.candidates()[wrong_index];

    let state = QuizReducer::reduce(state, QuizIntent::Tap { index: wrong_index });
    assert_eq!(state.score, 0);
    assert_eq!(state.outcome, Some(RoundOutcome::Wrong { tapped: expected }));
}

#[test]
fn reshuffle_preserves_the_catalogue() {
    let mut rng = ScriptedRng::new(vec![3, 8, 1, 6, 0, 9, 4, 2, 7, 5, 1]);
    let state = begin(QuizState::default(), &mut rng);
    assert_eq!(state.countries.len(), Country::ALL.len());
    for country in Country::ALL {
        assert!(state.countries.contains(&country));
    }
}

#[test]
fn score_is_monotonic_across_mixed_rounds() {
    let mut rng = ScriptedRng::zeros();
    let mut state = QuizState::default();
    let mut last_score = 0;
    for i in 0..6 {
        state = begin(state, &mut rng);
        let index = if i % 2 == 0 {
            state.correct
        } else {
            (state.correct + 1) % CANDIDATES
        };
        state = QuizReducer::reduce(state, QuizIntent::Tap { index });
        assert!(state.score >= last_score);
        last_score = state.score;
        state = QuizReducer::reduce(state, QuizIntent::DismissOutcome);
    }
    assert_eq!(last_score, 3);
}
