use crate::puzzle::Cell;
use crate::puzzle::Puzzle;
use crate::results::CellFeedback;
use crate::results::Guess;
use crate::results::GuessFeedback;
use std::collections::HashMap;

/// The per-letter knowledge demonstrated by a single guess, before it is merged into the
/// accumulated clues.
#[derive(Debug, PartialEq, Clone, Default)]
pub(crate) struct LetterTally {
    counts: HashMap<char, TallyCount>,
    forbidden: Vec<(char, Cell)>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub(crate) struct TallyCount {
    /// Occurrences of the letter this guess proved to exist in each word.
    pub min: [u8; 2],
    /// Whether this guess proved that no unaccounted occurrence remains in each word.
    pub exhausted: [bool; 2],
}

impl LetterTally {
    fn bump_min(&mut self, letter: char, word: usize) {
        self.counts.entry(letter).or_default().min[word] += 1;
    }

    fn exhaust(&mut self, letter: char, word: usize) {
        self.counts.entry(letter).or_default().exhausted[word] = true;
    }

    fn forbid(&mut self, letter: char, cell: Cell) {
        self.forbidden.push((letter, cell));
    }

    pub(crate) fn counts(&self) -> impl Iterator<Item = (char, TallyCount)> + '_ {
        self.counts.iter().map(|(letter, count)| (*letter, *count))
    }

    pub(crate) fn forbidden(&self) -> &[(char, Cell)] {
        &self.forbidden
    }
}

/// The remaining unmatched occurrences of each letter in each answer word.
///
/// The crossing letter is one physical occurrence shared by both words' requirements, so both
/// words count it in their own pool, and consuming that occurrence through one word also removes
/// it from the other. That happens once the consuming word's pool for the letter empties, or
/// immediately when the crossing tile itself is matched.
struct CrossingBudget {
    counts: [HashMap<char, u8>; 2],
    crossing: Option<char>,
    offsets: [usize; 2],
}

impl CrossingBudget {
    fn new(puzzle: &Puzzle) -> CrossingBudget {
        let mut counts: [HashMap<char, u8>; 2] = [HashMap::new(), HashMap::new()];
        for word in 0..2 {
            for letter in puzzle.word(word).chars() {
                *counts[word].entry(letter).or_insert(0) += 1;
            }
        }
        CrossingBudget {
            counts,
            crossing: Some(puzzle.crossing_letter()),
            offsets: puzzle.offsets(),
        }
    }

    fn remaining(&self, word: usize, letter: char) -> u8 {
        *self.counts[word].get(&letter).unwrap_or(&0)
    }

    /// Removes one occurrence of the letter from the given word's pool.
    ///
    /// `pos` is the matched tile for exact matches, and `None` for presence matches.
    fn deplete(&mut self, word: usize, letter: char, pos: Option<usize>) {
        let count = self.counts[word].entry(letter).or_insert(0);
        *count = count.saturating_sub(1);
        let emptied = *count == 0;
        if self.crossing == Some(letter) && (emptied || pos == Some(self.offsets[word])) {
            // The shared occurrence is spent; it no longer counts toward the other word.
            self.crossing = None;
            let other = self.counts[1 - word].entry(letter).or_insert(0);
            *other = other.saturating_sub(1);
        }
    }
}

/// Scores a guess against the puzzle's answer words.
///
/// Tiles are classified in three passes over the scorable cells: exact matches first, then
/// same-word presence, then cross-word presence, each pass consuming from the letter pools so
/// that repeated guess letters never claim more occurrences than the answers hold. The vertical
/// word's copy of the shared tile is skipped and mirrors the horizontal result.
pub fn evaluate(puzzle: &Puzzle, guess: &Guess) -> GuessFeedback {
    let offsets = puzzle.offsets();
    let mut budget = CrossingBudget::new(puzzle);
    let mut tally = LetterTally::default();
    let mut cells: [Vec<Option<CellFeedback>>; 2] = [
        vec![None; puzzle.word_len(0)],
        vec![None; puzzle.word_len(1)],
    ];

    // Exact matches.
    for cell in puzzle.scorable_cells() {
        let (word, pos) = (cell.word as usize, cell.pos as usize);
        let letter = guess.letter(word, pos);
        if letter != puzzle.letter(word, pos) {
            continue;
        }
        cells[word][pos] = Some(CellFeedback::Correct);
        budget.deplete(word, letter, Some(pos));
        tally.bump_min(letter, word);
        if word == 0 && pos == offsets[0] {
            // The shared tile proves an occurrence in the vertical word too.
            tally.bump_min(letter, 1);
        }
    }

    // Presence in the tile's own word. Every cell that missed also proves its letter is not at
    // this position, whatever the remaining passes decide.
    for cell in puzzle.scorable_cells() {
        let (word, pos) = (cell.word as usize, cell.pos as usize);
        if cells[word][pos].is_some() {
            continue;
        }
        let letter = guess.letter(word, pos);
        tally.forbid(letter, cell);
        if budget.remaining(word, letter) > 0 {
            cells[word][pos] = Some(CellFeedback::PresentSameWord);
            budget.deplete(word, letter, None);
            tally.bump_min(letter, word);
        }
    }

    // Presence in the crossing word, otherwise absent.
    for cell in puzzle.scorable_cells() {
        let (word, pos) = (cell.word as usize, cell.pos as usize);
        if cells[word][pos].is_some() {
            continue;
        }
        let letter = guess.letter(word, pos);
        let other = 1 - word;
        if budget.remaining(other, letter) > 0 {
            cells[word][pos] = Some(CellFeedback::PresentCrossWord);
            budget.deplete(other, letter, None);
            tally.bump_min(letter, other);
            // The occurrence had to be attributed to the other word, so this word holds no
            // unaccounted copy.
            tally.exhaust(letter, word);
        } else {
            cells[word][pos] = Some(CellFeedback::Absent);
            tally.exhaust(letter, 0);
            tally.exhaust(letter, 1);
        }
    }

    cells[1][offsets[1]] = cells[0][offsets[0]];
    let cells = cells.map(|word_cells| {
        word_cells
            .into_iter()
            .map(|feedback| feedback.unwrap_or(CellFeedback::Absent))
            .collect()
    });
    GuessFeedback::new(guess.clone(), cells, offsets, tally)
}
