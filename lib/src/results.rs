use crate::clues::HardModeViolation;
use crate::evaluator::LetterTally;
use crate::puzzle::normalize_word;
use crate::puzzle::Cell;
use crate::puzzle::Puzzle;
use std::fmt;

/// The score of a single guessed letter at a specific tile.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellFeedback {
    /// The letter matches the answer at this tile.
    Correct,
    /// The letter occurs elsewhere in this tile's own word.
    PresentSameWord,
    /// The letter occurs in the other word.
    PresentCrossWord,
    /// No unmatched occurrence of the letter remains in either word.
    Absent,
}

/// Where a game stands after the guesses made so far.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Indicates that an error occurred while building a puzzle or processing a guess.
///
/// The recoverable variants (everything from [`GameError::IncompleteGuess`] down) reject the
/// guess without consuming it; session state is only mutated by an accepted guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GameError {
    /// The two puzzle words share no letter, so no crossing exists.
    NoCommonLetter,
    /// A shareable code did not decode to exactly two words.
    InvalidPuzzleCode,
    /// One or more given characters are not in the supported set.
    UnsupportedCharacter,
    /// A guess was submitted with one or more cells still empty.
    IncompleteGuess,
    /// The two guessed words disagree about the letter on the shared tile.
    MismatchedCrossing,
    /// A guessed word was not accepted by the lexicon.
    UnrecognizedWord(Box<str>),
    /// The guess contradicts knowledge already revealed this game.
    HardMode(HardModeViolation),
    /// The game has already finished; no further guesses are accepted.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::NoCommonLetter => write!(f, "the two words have no letter in common"),
            GameError::InvalidPuzzleCode => {
                write!(f, "the puzzle code must contain exactly two words")
            }
            GameError::UnsupportedCharacter => {
                write!(f, "words may only use the letters 'a' through 'z'")
            }
            GameError::IncompleteGuess => write!(f, "every cell must be filled before guessing"),
            GameError::MismatchedCrossing => {
                write!(f, "the guessed words disagree at the crossing tile")
            }
            GameError::UnrecognizedWord(word) => write!(f, "'{}' is not a recognized word", word),
            GameError::HardMode(violation) => violation.fmt(f),
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// One full-length candidate for each word, submitted together as a unit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Guess {
    words: [Box<str>; 2],
}

impl Guess {
    /// Validates and builds a guess for the given puzzle.
    ///
    /// Both words must be complete ([`GameError::IncompleteGuess`]), use only supported letters,
    /// and agree on the letter at the shared tile ([`GameError::MismatchedCrossing`]).
    pub fn new(puzzle: &Puzzle, word_a: &str, word_b: &str) -> Result<Guess, GameError> {
        let word_a = normalize_word(word_a)?;
        let word_b = normalize_word(word_b)?;
        if word_a.len() != puzzle.word_len(0) || word_b.len() != puzzle.word_len(1) {
            return Err(GameError::IncompleteGuess);
        }
        let [cross_a, cross_b] = puzzle.offsets();
        if word_a.as_bytes()[cross_a] != word_b.as_bytes()[cross_b] {
            return Err(GameError::MismatchedCrossing);
        }
        Ok(Guess {
            words: [word_a.into(), word_b.into()],
        })
    }

    /// Retrieves the guessed word at the given index (0 = horizontal, 1 = vertical).
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Returns the guessed letter at the given position.
    pub fn letter(&self, word: usize, pos: usize) -> char {
        self.words[word].as_bytes()[pos] as char
    }

    /// Counts how many times the letter appears in the given guessed word.
    ///
    /// The shared tile's letter counts once in each word, mirroring how it is typed once but
    /// belongs to both.
    pub fn count_of(&self, word: usize, letter: char) -> u8 {
        self.words[word]
            .bytes()
            .filter(|other| *other as char == letter)
            .count() as u8
    }
}

/// The scored result of a single guess.
#[derive(Debug, PartialEq, Clone)]
pub struct GuessFeedback {
    guess: Guess,
    /// Feedback for each tile, in word order. The vertical word's entry at the crossing offset
    /// mirrors the horizontal word's crossing entry, since they are the same physical tile.
    cells: [Vec<CellFeedback>; 2],
    offsets: [usize; 2],
    tally: LetterTally,
}

impl GuessFeedback {
    pub(crate) fn new(
        guess: Guess,
        cells: [Vec<CellFeedback>; 2],
        offsets: [usize; 2],
        tally: LetterTally,
    ) -> GuessFeedback {
        GuessFeedback {
            guess,
            cells,
            offsets,
            tally,
        }
    }

    /// The guess this feedback was computed for.
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Retrieves the feedback for one tile.
    pub fn cell(&self, cell: Cell) -> CellFeedback {
        self.cells[cell.word as usize][cell.pos as usize]
    }

    /// Retrieves the feedback for every tile of one word, including the shared tile.
    pub fn word_cells(&self, word: usize) -> &[CellFeedback] {
        &self.cells[word]
    }

    /// Returns `true` iff every tile scored [`CellFeedback::Correct`].
    pub fn is_winning(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|feedback| *feedback == CellFeedback::Correct)
    }

    /// Counts the tiles that did not score [`CellFeedback::Correct`], counting the shared tile
    /// once.
    pub fn wrong_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(word, cells)| {
                cells.iter().enumerate().filter(move |(pos, feedback)| {
                    (word != 1 || *pos != self.offsets[1]) && **feedback != CellFeedback::Correct
                })
            })
            .count()
    }

    pub(crate) fn offsets(&self) -> [usize; 2] {
        self.offsets
    }

    pub(crate) fn tally(&self) -> &LetterTally {
        &self.tally
    }
}
