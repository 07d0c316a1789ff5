use crate::results::GameError;

/// Identifies one tile in the puzzle grid.
///
/// `word` is 0 for the horizontal word and 1 for the vertical word. The vertical word's tile at
/// the crossing offset is the same physical tile as the horizontal word's crossing tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub word: u8,
    /// The zero-based location (i.e. index) for this tile in its word.
    pub pos: u8,
}

impl Cell {
    pub fn new(word: u8, pos: u8) -> Cell {
        Cell { word, pos }
    }
}

/// Two answer words arranged to cross at one shared letter.
///
/// The crossing is chosen at construction time and never changes. The letter at
/// `words[0][offsets[0]]` always equals the letter at `words[1][offsets[1]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    words: [Box<str>; 2],
    offsets: [usize; 2],
}

impl Puzzle {
    /// Constructs a puzzle from two words, crossing them at their most central common letter.
    ///
    /// Every position pair with identical letters is scored by its combined distance from the two
    /// word centers, and the first pair with the lowest score wins (scanning the horizontal word
    /// outermost). Fails with [`GameError::NoCommonLetter`] if the words share no letter.
    pub fn new(word_a: &str, word_b: &str) -> Result<Puzzle, GameError> {
        let word_a = normalize_word(word_a)?;
        let word_b = normalize_word(word_b)?;
        let center_a = word_a.len() / 2;
        let center_b = word_b.len() / 2;
        let mut best: Option<(usize, [usize; 2])> = None;
        for (i, letter_a) in word_a.bytes().enumerate() {
            for (j, letter_b) in word_b.bytes().enumerate() {
                if letter_a != letter_b {
                    continue;
                }
                let score = center_a.abs_diff(i) + center_b.abs_diff(j);
                if best.map_or(true, |(best_score, _)| score < best_score) {
                    best = Some((score, [i, j]));
                }
            }
        }
        match best {
            Some((_, offsets)) => Ok(Puzzle {
                words: [word_a.into(), word_b.into()],
                offsets,
            }),
            None => Err(GameError::NoCommonLetter),
        }
    }

    /// Retrieves the answer word at the given index (0 = horizontal, 1 = vertical).
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Returns the length of the answer word at the given index.
    pub fn word_len(&self, index: usize) -> usize {
        self.words[index].len()
    }

    /// Returns the crossing offsets: the position of the shared tile in each word.
    pub fn offsets(&self) -> [usize; 2] {
        self.offsets
    }

    /// Returns the letter held by the shared tile.
    pub fn crossing_letter(&self) -> char {
        self.letter(0, self.offsets[0])
    }

    /// Returns the answer letter at the given position.
    pub fn letter(&self, word: usize, pos: usize) -> char {
        self.words[word].as_bytes()[pos] as char
    }

    /// Returns `true` iff the cell is the vertical word's copy of the shared tile.
    pub fn is_duplicate_crossing(&self, cell: Cell) -> bool {
        cell.word == 1 && cell.pos as usize == self.offsets[1]
    }

    /// Iterates over every cell that receives its own score: all cells of both words except the
    /// vertical word's copy of the shared tile.
    pub fn scorable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let lengths = [self.word_len(0), self.word_len(1)];
        let cross_b = self.offsets[1];
        (0..lengths[0])
            .map(|pos| Cell::new(0, pos as u8))
            .chain(
                (0..lengths[1])
                    .filter(move |pos| *pos != cross_b)
                    .map(|pos| Cell::new(1, pos as u8)),
            )
    }
}

/// Lower-cases a word and checks that it only uses the letters 'a' through 'z'.
pub(crate) fn normalize_word(word: &str) -> Result<String, GameError> {
    let word = word.trim().to_ascii_lowercase();
    if !word.bytes().all(|letter| letter.is_ascii_lowercase()) {
        return Err(GameError::UnsupportedCharacter);
    }
    Ok(word)
}
