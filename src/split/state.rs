use crate::mvi::UiState;
use crate::split::TIP_FRACTIONS;

pub const MIN_PEOPLE: u32 = 2;
pub const MAX_PEOPLE: u32 = 99;

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Amount,
    People,
    Tip,
}

/// Session state for the bill splitter.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitState {
    /// Raw amount text. Digits and at most one decimal point.
    pub amount_input: String,
    /// Party size, always within [MIN_PEOPLE, MAX_PEOPLE].
    pub people: u32,
    /// Index into [`TIP_FRACTIONS`].
    pub tip_index: usize,
    pub focus: SplitField,
}

impl Default for SplitState {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            people: MIN_PEOPLE,
            // 10%, the picker's starting position.
            tip_index: 2,
            focus: SplitField::Amount,
        }
    }
}

impl UiState for SplitState {}

impl SplitState {
    /// Parsed bill amount; an empty or unparseable buffer reads as zero.
    pub fn amount(&self) -> f64 {
        self.amount_input.parse().unwrap_or(0.0)
    }

    pub fn tip_fraction(&self) -> f64 {
        TIP_FRACTIONS[self.tip_index]
    }
}
