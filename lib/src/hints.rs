use crate::clues::ClueBoard;
use crate::clues::ClueMode;
use crate::puzzle::Cell;
use crate::puzzle::Puzzle;
use crate::results::GameError;
use crate::results::Guess;
use std::collections::HashMap;

/// The player's current, possibly incomplete, typed entry.
///
/// The shared tile is stored mirrored in both words, so typing or erasing it through either
/// word updates both views, exactly like the single physical tile it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialEntry {
    cells: [Vec<Option<char>>; 2],
    offsets: [usize; 2],
}

impl PartialEntry {
    /// Creates an empty entry shaped like the given puzzle.
    pub fn new(puzzle: &Puzzle) -> PartialEntry {
        PartialEntry {
            cells: [
                vec![None; puzzle.word_len(0)],
                vec![None; puzzle.word_len(1)],
            ],
            offsets: puzzle.offsets(),
        }
    }

    /// Types a letter into the given cell. The cell must lie within the puzzle.
    pub fn set(&mut self, cell: Cell, letter: char) -> Result<(), GameError> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(GameError::UnsupportedCharacter);
        }
        self.put(cell, Some(letter));
        Ok(())
    }

    /// Erases the given cell.
    pub fn clear(&mut self, cell: Cell) {
        self.put(cell, None);
    }

    fn put(&mut self, cell: Cell, letter: Option<char>) {
        let (word, pos) = (cell.word as usize, cell.pos as usize);
        self.cells[word][pos] = letter;
        if pos == self.offsets[word] {
            let other = 1 - word;
            self.cells[other][self.offsets[other]] = letter;
        }
    }

    /// The letter currently typed into the given cell, if any.
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.cells[cell.word as usize][cell.pos as usize]
    }

    /// Returns `true` iff every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Converts the entry into a submittable guess, failing with
    /// [`GameError::IncompleteGuess`] while any cell is empty.
    pub fn to_guess(&self, puzzle: &Puzzle) -> Result<Guess, GameError> {
        let mut words = [String::new(), String::new()];
        for word in 0..2 {
            for letter in &self.cells[word] {
                match letter {
                    Some(letter) => words[word].push(*letter),
                    None => return Err(GameError::IncompleteGuess),
                }
            }
        }
        Guess::new(puzzle, &words[0], &words[1])
    }

    /// Counts each letter's occurrences per word. The shared tile counts in both words.
    fn letter_counts(&self) -> [HashMap<char, u8>; 2] {
        let mut counts: [HashMap<char, u8>; 2] = [HashMap::new(), HashMap::new()];
        for word in 0..2 {
            for letter in self.cells[word].iter().flatten() {
                *counts[word].entry(*letter).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Advisory marks for one typed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellHint {
    /// The typed letter contradicts the accumulated clues: it is forbidden at this tile, or
    /// more copies are typed than are known to remain.
    pub likely_wrong: bool,
    /// The typed letter matches a confirmed tile.
    pub matches_confirmed: bool,
}

/// Advisory state for one keyboard letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyHint {
    /// A tile confirmed for this letter is empty or holds something else.
    pub needs_confirmed: bool,
    /// The scoped entry holds fewer copies than guesses have proven necessary.
    pub missing: bool,
    /// Per-word mode only: the focused word is satisfied, but the other word still needs this
    /// letter.
    pub missing_cross: bool,
    /// Every known-relevant copy is already typed; more would be wrong.
    pub spent: bool,
}

/// A projection of the accumulated clues onto the current entry.
///
/// This is advisory only; it never blocks a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HintView {
    cells: [Vec<CellHint>; 2],
    keys: HashMap<char, KeyHint>,
}

impl HintView {
    /// The marks for one tile.
    pub fn cell(&self, cell: Cell) -> CellHint {
        self.cells[cell.word as usize][cell.pos as usize]
    }

    /// The keyboard state for one letter.
    pub fn key(&self, letter: char) -> KeyHint {
        self.keys.get(&letter).copied().unwrap_or_default()
    }
}

/// Projects the accumulated clues onto the player's current entry.
///
/// `focus_word` selects which word scopes the per-word keyboard hints; it is ignored in
/// combined mode.
pub fn project(clues: &ClueBoard, entry: &PartialEntry, focus_word: usize) -> HintView {
    let counts = entry.letter_counts();
    let mode = clues.mode();
    let mut cells = [
        vec![CellHint::default(); entry.cells[0].len()],
        vec![CellHint::default(); entry.cells[1].len()],
    ];
    let mut keys: HashMap<char, KeyHint> = HashMap::new();

    for word in 0..2 {
        for pos in 0..entry.cells[word].len() {
            let cell = Cell::new(word as u8, pos as u8);
            let typed = entry.get(cell);
            if let Some(confirmed) = clues.confirmed_letter(cell) {
                if typed == Some(confirmed) {
                    cells[word][pos].matches_confirmed = true;
                } else {
                    keys.entry(confirmed).or_default().needs_confirmed = true;
                }
            }
            // The duplicate crossing tile mirrors the horizontal mark below.
            if word == 1 && pos == entry.offsets[1] {
                continue;
            }
            let typed = match typed {
                Some(typed) => typed,
                None => continue,
            };
            let typed_count = match mode {
                ClueMode::PerWord => *counts[word].get(&typed).unwrap_or(&0),
                ClueMode::Combined => {
                    counts[0].get(&typed).unwrap_or(&0) + counts[1].get(&typed).unwrap_or(&0)
                }
            };
            let bound = match mode {
                ClueMode::PerWord => clues.known_bound(typed, word),
                ClueMode::Combined => clues.combined_bound(typed),
            };
            if clues.is_forbidden(typed, cell) || bound.map_or(false, |bound| typed_count > bound)
            {
                cells[word][pos].likely_wrong = true;
            }
        }
    }
    let cross_hint = cells[0][entry.offsets[0]];
    cells[1][entry.offsets[1]].likely_wrong = cross_hint.likely_wrong;

    for letter in 'a'..='z' {
        let total_typed = counts[0].get(&letter).unwrap_or(&0) + counts[1].get(&letter).unwrap_or(&0);
        let total_needed = clues.min_count(letter, 0) + clues.min_count(letter, 1);
        let (typed, needed, bound) = match mode {
            ClueMode::PerWord => (
                *counts[focus_word].get(&letter).unwrap_or(&0),
                clues.min_count(letter, focus_word),
                clues.known_bound(letter, focus_word),
            ),
            ClueMode::Combined => (total_typed, total_needed, clues.combined_bound(letter)),
        };
        let key = keys.entry(letter).or_default();
        if needed > typed {
            key.missing = true;
        } else if mode == ClueMode::PerWord && total_needed > total_typed {
            key.missing_cross = true;
        }
        if bound.map_or(false, |bound| typed >= bound) {
            key.spent = true;
        }
    }

    HintView { cells, keys }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::results::GameError;

    fn clued_board(
        puzzle: &Puzzle,
        mode: ClueMode,
        guesses: &[(&str, &str)],
    ) -> Result<ClueBoard, GameError> {
        let mut board = ClueBoard::new(puzzle, mode);
        for (word_a, word_b) in guesses {
            let guess = Guess::new(puzzle, word_a, word_b)?;
            board.merge(&evaluate(puzzle, &guess));
        }
        Ok(board)
    }

    #[test]
    fn forbidden_letter_is_marked_likely_wrong() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        // 'p' was already tried and rejected at the last horizontal tile.
        let board = clued_board(&puzzle, ClueMode::PerWord, &[("cap", "arm")])?;

        let mut entry = PartialEntry::new(&puzzle);
        entry.set(Cell::new(0, 2), 'p')?;
        let hints = project(&board, &entry, 0);

        assert!(hints.cell(Cell::new(0, 2)).likely_wrong);
        Ok(())
    }

    #[test]
    fn over_typing_an_exhausted_letter_is_marked() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        // "tat"/"arm" proves "cat" holds exactly one 't'.
        let board = clued_board(&puzzle, ClueMode::PerWord, &[("tat", "arm")])?;

        let mut entry = PartialEntry::new(&puzzle);
        entry.set(Cell::new(0, 1), 't')?;
        let hints = project(&board, &entry, 0);
        // A single 't' at an untried tile is fine; it is still needed somewhere.
        assert!(!hints.cell(Cell::new(0, 1)).likely_wrong);

        entry.set(Cell::new(0, 2), 't')?;
        let hints = project(&board, &entry, 0);
        // Two typed 't's exceed the proven bound of one, so both tiles light up.
        assert!(hints.cell(Cell::new(0, 1)).likely_wrong);
        assert!(hints.cell(Cell::new(0, 2)).likely_wrong);
        Ok(())
    }

    #[test]
    fn keyboard_reports_missing_and_spent_letters() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        let board = clued_board(&puzzle, ClueMode::PerWord, &[("tap", "arm")])?;

        let entry = PartialEntry::new(&puzzle);
        let hints = project(&board, &entry, 0);

        // 't' was proven present in the horizontal word and nothing is typed yet.
        assert!(hints.key('t').missing);
        // 'p' was proven absent everywhere: zero typed already meets the bound of zero.
        assert!(hints.key('p').spent);
        assert!(!hints.key('p').missing);
        Ok(())
    }

    #[test]
    fn keyboard_flags_unfilled_confirmed_tiles() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        let board = clued_board(&puzzle, ClueMode::PerWord, &[("cap", "arm")])?;

        let mut entry = PartialEntry::new(&puzzle);
        let hints = project(&board, &entry, 0);
        assert!(hints.key('c').needs_confirmed);

        entry.set(Cell::new(0, 0), 'c')?;
        let hints = project(&board, &entry, 0);
        assert!(!hints.key('c').needs_confirmed);
        assert!(hints.cell(Cell::new(0, 0)).matches_confirmed);
        Ok(())
    }

    #[test]
    fn per_word_mode_scopes_keyboard_to_the_focused_word() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        // 'm' is proven to belong to the vertical word.
        let board = clued_board(&puzzle, ClueMode::PerWord, &[("mat", "ars")])?;

        let entry = PartialEntry::new(&puzzle);
        // Focused on the horizontal word, 'm' is only required across the crossing.
        let hints = project(&board, &entry, 0);
        assert!(!hints.key('m').missing);
        assert!(hints.key('m').missing_cross);

        // Focused on the vertical word, 'm' is required right here.
        let hints = project(&board, &entry, 1);
        assert!(hints.key('m').missing);
        assert!(!hints.key('m').missing_cross);
        Ok(())
    }

    #[test]
    fn combined_mode_counts_the_shared_tile_for_both_words() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        // The crossing 'a' is known; combined mode needs it counted once per word.
        let board = clued_board(&puzzle, ClueMode::Combined, &[("cap", "arm")])?;

        let mut entry = PartialEntry::new(&puzzle);
        entry.set(Cell::new(0, 1), 'a')?;
        let hints = project(&board, &entry, 0);

        // One physical 'a' on the shared tile counts twice, satisfying the combined need of 2.
        assert!(!hints.key('a').missing);
        assert!(!hints.cell(Cell::new(0, 1)).likely_wrong);
        Ok(())
    }

    #[test]
    fn typing_the_shared_tile_updates_both_words() -> Result<(), GameError> {
        let puzzle = Puzzle::new("cat", "arm")?;
        let mut entry = PartialEntry::new(&puzzle);

        entry.set(Cell::new(0, 1), 'x')?;
        assert_eq!(entry.get(Cell::new(1, 0)), Some('x'));

        entry.clear(Cell::new(1, 0));
        assert_eq!(entry.get(Cell::new(0, 1)), None);
        Ok(())
    }
}
