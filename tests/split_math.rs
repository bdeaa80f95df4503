use parlor::mvi::Reducer;
use parlor::split::{
    format_amount, per_person, total_with_tip, SplitIntent, SplitReducer, SplitState,
    MAX_PEOPLE, MIN_PEOPLE, TIP_FRACTIONS,
};

#[test]
fn hundred_dollars_four_people_fifteen_percent() {
    let total = total_with_tip(100.0, 0.15);
    let share = per_person(total, 4);
    assert_eq!(format_amount(total), "115.00");
    assert_eq!(format_amount(share), "28.75");
}

#[test]
fn derived_values_recompute_from_inputs_alone() {
    // Drive the state to amount=100, people=4, tip=15% through intents
    // and confirm the derivations agree with the pure functions.
    let mut state = SplitState::default();
    for c in "100".chars() {
        state = SplitReducer::reduce(state, SplitIntent::InputChar(c));
    }
    state = SplitReducer::reduce(state, SplitIntent::FocusNext);
    state = SplitReducer::reduce(state, SplitIntent::Increase);
    state = SplitReducer::reduce(state, SplitIntent::Increase);
    state = SplitReducer::reduce(state, SplitIntent::FocusNext);
    state = SplitReducer::reduce(state, SplitIntent::Increase);

    assert_eq!(state.amount(), 100.0);
    assert_eq!(state.people, 4);
    assert_eq!(state.tip_fraction(), 0.15);

    let total = total_with_tip(state.amount(), state.tip_fraction());
    assert_eq!(format_amount(per_person(total, state.people)), "28.75");
}

#[test]
fn party_size_is_clamped_to_valid_range() {
    assert_eq!(MIN_PEOPLE, 2);
    assert_eq!(MAX_PEOPLE, 99);

    let mut state = SplitState::default();
    state = SplitReducer::reduce(state, SplitIntent::FocusNext);
    state = SplitReducer::reduce(state, SplitIntent::Decrease);
    assert_eq!(state.people, MIN_PEOPLE);
}

#[test]
fn tip_fractions_are_the_fixed_set() {
    assert_eq!(TIP_FRACTIONS, [0.0, 0.05, 0.10, 0.15, 0.20, 0.25]);
}

#[test]
fn tip_zero_means_share_is_plain_division() {
    let total = total_with_tip(90.0, 0.0);
    assert_eq!(per_person(total, 3), 30.0);
}
