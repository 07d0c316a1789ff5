use crate::clues::ClueBoard;
use crate::clues::ClueMode;
use crate::data::Lexicon;
use crate::evaluator::evaluate;
use crate::puzzle::Puzzle;
use crate::results::GameError;
use crate::results::GameStatus;
use crate::results::Guess;
use crate::results::GuessFeedback;
use crate::share;

/// The number of guesses allowed before a game is lost.
pub const MAX_GUESSES: usize = 10;

/// One play-through of a single puzzle.
///
/// The session owns the ordered guess history and the accumulated clue board; both only change
/// when a guess passes every check and is scored. Everything a guess is validated against flows
/// through here, so a rejected guess provably leaves no trace.
#[derive(Debug)]
pub struct GameSession {
    puzzle: Puzzle,
    hard_mode: bool,
    clue_mode: ClueMode,
    clues: ClueBoard,
    history: Vec<GuessFeedback>,
    status: GameStatus,
}

impl GameSession {
    /// Starts a fresh session. The clue mode is derived from the hard-mode setting: hard games
    /// collapse cross-word clues, easy games keep them distinct.
    pub fn new(puzzle: Puzzle, hard_mode: bool) -> GameSession {
        let clue_mode = if hard_mode {
            ClueMode::Combined
        } else {
            ClueMode::PerWord
        };
        GameSession {
            clues: ClueBoard::new(&puzzle, clue_mode),
            puzzle,
            hard_mode,
            clue_mode,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn clue_mode(&self) -> ClueMode {
        self.clue_mode
    }

    /// The accumulated clues revealed by the scored guesses so far.
    pub fn clues(&self) -> &ClueBoard {
        &self.clues
    }

    /// The scored guesses so far, oldest first.
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    /// Applies a changed hard-mode setting, returning whether it took effect.
    ///
    /// Before the first guess the setting is free to change, and the clue mode follows it. Once
    /// a guess has been scored the mode only ratchets down: disabling applies immediately, while
    /// enabling must wait for the next session.
    pub fn set_hard_mode(&mut self, enabled: bool) -> bool {
        if self.history.is_empty() {
            self.hard_mode = enabled;
            self.clue_mode = if enabled {
                ClueMode::Combined
            } else {
                ClueMode::PerWord
            };
            self.clues = ClueBoard::new(&self.puzzle, self.clue_mode);
            true
        } else if !enabled {
            self.hard_mode = false;
            true
        } else {
            false
        }
    }

    /// Validates and scores one guess.
    ///
    /// The words must be complete, pass the lexicon (the answer words always count), and, in
    /// hard mode, agree with every clue revealed so far. Any rejection leaves the session
    /// unchanged; an accepted guess is scored, merged into the clues, and may finish the game.
    pub fn submit(
        &mut self,
        word_a: &str,
        word_b: &str,
        lexicon: &impl Lexicon,
    ) -> Result<&GuessFeedback, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let guess = Guess::new(&self.puzzle, word_a, word_b)?;
        for word in 0..2 {
            let candidate = guess.word(word);
            if !lexicon.is_valid(candidate)
                && candidate != self.puzzle.word(0)
                && candidate != self.puzzle.word(1)
            {
                return Err(GameError::UnrecognizedWord(candidate.into()));
            }
        }
        if self.hard_mode {
            self.clues.check_guess(&guess).map_err(GameError::HardMode)?;
        }
        Ok(self.apply(guess))
    }

    /// Scores a validated guess and folds it into the session state.
    fn apply(&mut self, guess: Guess) -> &GuessFeedback {
        let feedback = evaluate(&self.puzzle, &guess);
        self.clues.merge(&feedback);
        if feedback.is_winning() {
            self.status = GameStatus::Won;
        }
        self.history.push(feedback);
        if self.status == GameStatus::InProgress && self.history.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }
        self.history.last().unwrap()
    }

    /// Renders the canonical share block for the guesses so far.
    pub fn summary(&self) -> String {
        share::summary(&self.history, self.clue_mode)
    }

    /// Captures the session for persistence, keyed by the puzzle's identity.
    pub fn save(&self, day: Option<u32>, lang: &str) -> SavedSession {
        SavedSession {
            day,
            lang: lang.to_string(),
            hard_mode: self.hard_mode,
            combined_clues: self.clue_mode == ClueMode::Combined,
            guesses: self
                .history
                .iter()
                .map(|feedback| {
                    format!("{} {}", feedback.guess().word(0), feedback.guess().word(1))
                })
                .collect(),
        }
    }

    /// Rebuilds a session by replaying a saved guess list through the normal scoring pipeline.
    ///
    /// Replay skips the lexicon and hard-mode checks, since every saved guess already passed
    /// them when it was first accepted. Derived state is never restored directly.
    pub fn restore(puzzle: Puzzle, saved: &SavedSession) -> Result<GameSession, GameError> {
        let mut session = GameSession::new(puzzle, saved.hard_mode);
        session.clue_mode = if saved.combined_clues {
            ClueMode::Combined
        } else {
            ClueMode::PerWord
        };
        session.clues = ClueBoard::new(&session.puzzle, session.clue_mode);
        for line in &saved.guesses {
            if session.status != GameStatus::InProgress {
                return Err(GameError::GameOver);
            }
            let (word_a, word_b) = match line.split_once(' ') {
                Some(words) => words,
                None => return Err(GameError::IncompleteGuess),
            };
            let guess = Guess::new(&session.puzzle, word_a, word_b)?;
            session.apply(guess);
        }
        Ok(session)
    }
}

/// A persisted session: the guess list and mode flags, keyed by puzzle identity.
///
/// Only inputs are saved; clues and status are reconstructed by replay through
/// [`GameSession::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedSession {
    /// The day index this puzzle was served for, or `None` for a custom puzzle.
    pub day: Option<u32>,
    pub lang: String,
    pub hard_mode: bool,
    pub combined_clues: bool,
    /// Each entry holds one guess's two words separated by a space.
    pub guesses: Vec<String>,
}

impl SavedSession {
    /// Returns `true` iff this record belongs to the given puzzle identity.
    pub fn matches(&self, day: Option<u32>, lang: &str) -> bool {
        self.day == day && self.lang == lang
    }
}
