use crate::puzzle::Cell;
use crate::puzzle::Puzzle;
use crate::results::CellFeedback;
use crate::results::Guess;
use crate::results::GuessFeedback;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

pub(crate) const WORD_NAMES: [&str; 2] = ["horizontal", "vertical"];

/// How cross-word presence clues are surfaced and aggregated for a whole session.
///
/// This is fixed once a game's first guess is accepted, because it changes both the rendering of
/// feedback and the precision of the accumulated letter counts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClueMode {
    /// Cross-word matches are distinguished from same-word matches, and letter counts are
    /// tracked and checked per word.
    PerWord,
    /// Cross-word matches collapse into the same clue as same-word matches, and letter counts
    /// are checked summed across both words.
    Combined,
}

/// Everything known about one letter from the guesses so far.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
struct LetterClue {
    /// The most occurrences any single guess has proven in each word.
    min: [u8; 2],
    /// Whether some guess proved no unaccounted occurrence remains in each word.
    exhausted: [bool; 2],
    /// Tiles this letter is proven not to occupy.
    forbidden: HashSet<Cell>,
}

/// The accumulated knowledge revealed by every scored guess of a session.
///
/// Knowledge only ever grows: confirmed tiles stay confirmed, proven minimum counts are merged
/// by taking the maximum, exhaustion flags are OR'd in, and forbidden tiles are unioned. The
/// board is only mutated through [`ClueBoard::merge`].
#[derive(Debug, Clone)]
pub struct ClueBoard {
    mode: ClueMode,
    offsets: [usize; 2],
    confirmed: [Vec<Option<char>>; 2],
    letters: HashMap<char, LetterClue>,
}

impl ClueBoard {
    /// Creates an empty board for the given puzzle.
    pub fn new(puzzle: &Puzzle, mode: ClueMode) -> ClueBoard {
        ClueBoard {
            mode,
            offsets: puzzle.offsets(),
            confirmed: [
                vec![None; puzzle.word_len(0)],
                vec![None; puzzle.word_len(1)],
            ],
            letters: HashMap::new(),
        }
    }

    pub fn mode(&self) -> ClueMode {
        self.mode
    }

    /// Returns the letter confirmed for this tile, if any guess has matched it exactly.
    pub fn confirmed_letter(&self, cell: Cell) -> Option<char> {
        self.confirmed[cell.word as usize][cell.pos as usize]
    }

    /// The most occurrences of the letter proven to exist in the given word.
    pub fn min_count(&self, letter: char, word: usize) -> u8 {
        self.letters
            .get(&letter)
            .map_or(0, |clue| clue.min[word])
    }

    /// Whether all occurrences of the letter in the given word are accounted for.
    pub fn is_exhausted(&self, letter: char, word: usize) -> bool {
        self.letters
            .get(&letter)
            .map_or(false, |clue| clue.exhausted[word])
    }

    /// Whether the letter is proven not to occupy the given tile.
    pub fn is_forbidden(&self, letter: char, cell: Cell) -> bool {
        self.letters
            .get(&letter)
            .map_or(false, |clue| clue.forbidden.contains(&cell))
    }

    /// The exact number of copies of the letter known to remain relevant for the given word, if
    /// exhaustion has pinned it down.
    pub fn known_bound(&self, letter: char, word: usize) -> Option<u8> {
        if self.is_exhausted(letter, word) {
            Some(self.min_count(letter, word))
        } else {
            None
        }
    }

    /// The combined-mode equivalent of [`ClueBoard::known_bound`]: an upper bound exists only
    /// once both words are exhausted for the letter.
    pub fn combined_bound(&self, letter: char) -> Option<u8> {
        if self.is_exhausted(letter, 0) && self.is_exhausted(letter, 1) {
            Some(self.min_count(letter, 0) + self.min_count(letter, 1))
        } else {
            None
        }
    }

    /// Folds one guess's feedback into the accumulated knowledge.
    pub fn merge(&mut self, feedback: &GuessFeedback) {
        for word in 0..2 {
            for (pos, result) in feedback.word_cells(word).iter().enumerate() {
                if *result == CellFeedback::Correct {
                    self.confirmed[word][pos] = Some(feedback.guess().letter(word, pos));
                }
            }
        }
        for (letter, tally) in feedback.tally().counts() {
            let clue = self.letters.entry(letter).or_default();
            for word in 0..2 {
                if tally.min[word] > clue.min[word] {
                    clue.min[word] = tally.min[word];
                }
                clue.exhausted[word] |= tally.exhausted[word];
            }
        }
        for (letter, cell) in feedback.tally().forbidden() {
            self.letters
                .entry(*letter)
                .or_default()
                .forbidden
                .insert(*cell);
        }
    }

    /// Checks a candidate guess against everything already revealed, for hard mode.
    ///
    /// A candidate must repeat every confirmed tile and reuse every letter at least as many
    /// times as proven, scoped per word or across both words according to the clue mode.
    pub fn check_guess(&self, guess: &Guess) -> Result<(), HardModeViolation> {
        for word in 0..2 {
            for (pos, known) in self.confirmed[word].iter().enumerate() {
                if word == 1 && pos == self.offsets[1] {
                    continue;
                }
                match known {
                    Some(letter) if guess.letter(word, pos) != *letter => {
                        return Err(HardModeViolation::MissingConfirmed {
                            cell: Cell::new(word as u8, pos as u8),
                            letter: *letter,
                        });
                    }
                    _ => {}
                }
            }
        }
        for letter in ('a'..='z').filter(|letter| self.letters.contains_key(letter)) {
            match self.mode {
                ClueMode::Combined => {
                    let required = self.min_count(letter, 0) + self.min_count(letter, 1);
                    let available = guess.count_of(0, letter) + guess.count_of(1, letter);
                    if available < required {
                        return Err(HardModeViolation::TooFewOfLetter {
                            letter,
                            required,
                            word: None,
                        });
                    }
                }
                ClueMode::PerWord => {
                    for word in 0..2 {
                        let required = self.min_count(letter, word);
                        if guess.count_of(word, letter) < required {
                            return Err(HardModeViolation::TooFewOfLetter {
                                letter,
                                required,
                                word: Some(word as u8),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Explains why a candidate guess contradicts the revealed clues.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HardModeViolation {
    /// A tile already matched exactly holds a different letter in the candidate.
    MissingConfirmed { cell: Cell, letter: char },
    /// The candidate uses a letter fewer times than guesses have proven necessary. `word` is
    /// `None` when the requirement spans both words.
    TooFewOfLetter {
        letter: char,
        required: u8,
        word: Option<u8>,
    },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HardModeViolation::MissingConfirmed { cell, letter } => write!(
                f,
                "the {} word must keep '{}' at position {}",
                WORD_NAMES[cell.word as usize],
                letter,
                cell.pos + 1
            ),
            HardModeViolation::TooFewOfLetter {
                letter,
                required,
                word: Some(word),
            } => write!(
                f,
                "the {} word must use '{}' at least {} time{}",
                WORD_NAMES[*word as usize],
                letter,
                required,
                if *required == 1 { "" } else { "s" }
            ),
            HardModeViolation::TooFewOfLetter {
                letter,
                required,
                word: None,
            } => write!(
                f,
                "the guess must use '{}' at least {} time{}",
                letter,
                required,
                if *required == 1 { "" } else { "s" }
            ),
        }
    }
}
