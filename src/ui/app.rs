use crate::dict::{SpellChecker, WordList};
use crate::mvi::Reducer;
use crate::quiz::{QuizIntent, QuizReducer, QuizState, CANDIDATES};
use crate::rng::{self, RandomSource};
use crate::scramble::{evaluate, ScrambleIntent, ScrambleReducer, ScrambleState, Verdict};
use crate::split::{SplitIntent, SplitReducer, SplitState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which screen currently has the keyboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Menu,
    Quiz,
    Split,
    Scramble,
}

/// Launcher entries, in menu order.
pub const MENU_ENTRIES: [(Screen, &str, &str); 3] = [
    (Screen::Quiz, "Guess the Flag", "Tap the right flag, score a point"),
    (Screen::Split, "WeSplit", "Split a bill with tip across the table"),
    (
        Screen::Scramble,
        "Word Scramble",
        "Derive words from a root word",
    ),
];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    menu_selection: usize,
    /// Quiz session state (MVI pattern).
    quiz: QuizState,
    /// Bill splitter state (MVI pattern).
    split: SplitState,
    /// Word game state (MVI pattern).
    scramble: ScrambleState,
    /// Start-word list, loaded once at startup.
    words: WordList,
    /// Injected spell-checking capability.
    checker: Box<dyn SpellChecker>,
    /// Injected randomness for shuffles and picks.
    rng: Box<dyn RandomSource>,
    language: String,
}

impl App {
    pub fn new(
        words: WordList,
        checker: Box<dyn SpellChecker>,
        rng: Box<dyn RandomSource>,
        language: String,
        screen: Screen,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            screen,
            menu_selection: 0,
            quiz: QuizState::default(),
            split: SplitState::default(),
            scramble: ScrambleState::default(),
            words,
            checker,
            rng,
            language,
        };
        // Both randomized sessions start immediately so every screen is
        // playable the moment it gains focus.
        app.begin_quiz_round();
        app.new_scramble_game();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn split(&self) -> &SplitState {
        &self.split
    }

    pub fn scramble(&self) -> &ScrambleState {
        &self.scramble
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => self.request_quit(),
                KeyCode::Char('n') if self.screen == Screen::Scramble => {
                    self.new_scramble_game();
                }
                _ => {}
            }
            return;
        }

        match self.screen {
            Screen::Menu => self.on_menu_key(key),
            Screen::Quiz => self.on_quiz_key(key),
            Screen::Split => self.on_split_key(key),
            Screen::Scramble => self.on_scramble_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selection = if self.menu_selection == 0 {
                    MENU_ENTRIES.len() - 1
                } else {
                    self.menu_selection - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selection = (self.menu_selection + 1) % MENU_ENTRIES.len();
            }
            KeyCode::Enter => {
                self.screen = MENU_ENTRIES[self.menu_selection].0;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.menu_selection = index;
                self.screen = MENU_ENTRIES[index].0;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    fn on_quiz_key(&mut self, key: KeyEvent) {
        if self.quiz.outcome.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.continue_quiz(),
                KeyCode::Esc => {
                    self.continue_quiz();
                    self.screen = Screen::Menu;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.dispatch_quiz(QuizIntent::Tap { index });
            }
            KeyCode::Esc => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn on_split_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Tab | KeyCode::Down => self.dispatch_split(SplitIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.dispatch_split(SplitIntent::FocusPrev),
            KeyCode::Right | KeyCode::Char('+') => self.dispatch_split(SplitIntent::Increase),
            KeyCode::Left | KeyCode::Char('-') => self.dispatch_split(SplitIntent::Decrease),
            KeyCode::Backspace => self.dispatch_split(SplitIntent::Backspace),
            KeyCode::Char(c) => self.dispatch_split(SplitIntent::InputChar(c)),
            _ => {}
        }
    }

    fn on_scramble_key(&mut self, key: KeyEvent) {
        if self.scramble.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dispatch_scramble(ScrambleIntent::DismissNotice);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Enter => self.submit_word(),
            KeyCode::Backspace => self.dispatch_scramble(ScrambleIntent::Backspace),
            KeyCode::Char(c) if c.is_alphabetic() => {
                self.dispatch_scramble(ScrambleIntent::InputChar(c));
            }
            _ => {}
        }
    }

    // ========================================================================
    // Quiz session methods
    // ========================================================================

    /// Reshuffle the catalogue and re-pick the correct index for a new round.
    pub fn begin_quiz_round(&mut self) {
        let mut countries = self.quiz.countries.clone();
        rng::shuffle(&mut countries, self.rng.as_mut());
        let correct = self.rng.pick(CANDIDATES);
        self.dispatch_quiz(QuizIntent::BeginRound { countries, correct });
    }

    fn continue_quiz(&mut self) {
        self.dispatch_quiz(QuizIntent::DismissOutcome);
        self.begin_quiz_round();
    }

    fn dispatch_quiz(&mut self, intent: QuizIntent) {
        dispatch_mvi!(self, quiz, QuizReducer, intent);
    }

    // ========================================================================
    // Word game session methods
    // ========================================================================

    /// Start a fresh word game with a random root. Repeat roots are allowed.
    pub fn new_scramble_game(&mut self) {
        let root = self.words.pick(self.rng.as_mut()).to_string();
        tracing::info!(root = %root, "starting word game session");
        self.dispatch_scramble(ScrambleIntent::NewGame { root });
    }

    /// Run the current input through the acceptance rules and apply the
    /// verdict. The dictionary lookup happens here, outside the reducer.
    pub fn submit_word(&mut self) {
        let raw = self.scramble.input.clone();
        let verdict = evaluate(
            &raw,
            &self.scramble.root,
            &self.scramble.accepted,
            self.checker.as_ref(),
            &self.language,
        );
        match verdict {
            Verdict::Ignored => {}
            Verdict::Rejected(reason) => {
                self.dispatch_scramble(ScrambleIntent::Reject { reason });
            }
            Verdict::Accepted { word, points } => {
                self.dispatch_scramble(ScrambleIntent::Accept { word, points });
            }
        }
    }

    fn dispatch_scramble(&mut self, intent: ScrambleIntent) {
        dispatch_mvi!(self, scramble, ScrambleReducer, intent);
    }

    // ========================================================================
    // Bill splitter methods
    // ========================================================================

    fn dispatch_split(&mut self, intent: SplitIntent) {
        dispatch_mvi!(self, split, SplitReducer, intent);
    }
}
