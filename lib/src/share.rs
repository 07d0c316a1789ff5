use crate::clues::ClueMode;
use crate::puzzle::Puzzle;
use crate::results::CellFeedback;
use crate::results::GameError;
use crate::results::GuessFeedback;

/// The substitution alphabet for shareable codes, in keyboard order.
const CIPHER: &[u8; 26] = b"qwertyuiopasdfghjklzxcvbnm";

/// Obfuscates text with a position-dependent substitution over the letters 'a' to 'z'.
///
/// Non-letter characters pass through unchanged but still advance the position. The mapping is
/// bijective: [`decode_text`] restores the input exactly, at any length.
pub fn encode_text(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(offset, letter)| {
            if !letter.is_ascii_lowercase() {
                return letter;
            }
            let index = letter as usize - 'a' as usize;
            CIPHER[(index + offset) % 26] as char
        })
        .collect()
}

/// Reverses [`encode_text`].
pub fn decode_text(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(offset, letter)| {
            if !letter.is_ascii_lowercase() {
                return letter;
            }
            let index = CIPHER
                .iter()
                .position(|cipher_letter| *cipher_letter as char == letter)
                .unwrap_or(0);
            let index = (index as i32 - offset as i32).rem_euclid(26);
            (b'a' + index as u8) as char
        })
        .collect()
}

/// Produces the shareable code for a puzzle's two words.
pub fn puzzle_code(puzzle: &Puzzle) -> String {
    encode_text(&format!("{}+{}", puzzle.word(0), puzzle.word(1)))
}

/// Decodes a shareable code into a puzzle.
///
/// The code must decode to exactly two words joined by '+' or a space
/// ([`GameError::InvalidPuzzleCode`]), and the words must cross
/// ([`GameError::NoCommonLetter`]).
pub fn puzzle_from_code(code: &str) -> Result<Puzzle, GameError> {
    let text = decode_text(code.trim());
    let mut words = text.split(|letter| letter == '+' || letter == ' ');
    match (words.next(), words.next(), words.next()) {
        (Some(word_a), Some(word_b), None) => Puzzle::new(word_a, word_b),
        _ => Err(GameError::InvalidPuzzleCode),
    }
}

/// Renders the canonical share block for a sequence of scored guesses.
///
/// Each guess becomes one line: a symbol per scorable tile, with the two words separated by a
/// space and the vertical word's copy of the shared tile omitted. In [`ClueMode::Combined`]
/// games, cross-word matches render with the same symbol as same-word matches.
pub fn summary(history: &[GuessFeedback], mode: ClueMode) -> String {
    let mut block = String::new();
    for (index, feedback) in history.iter().enumerate() {
        if index > 0 {
            block.push('\n');
        }
        let [_, cross_b] = feedback.offsets();
        for word in 0..2 {
            if word == 1 {
                block.push(' ');
            }
            for (pos, cell) in feedback.word_cells(word).iter().enumerate() {
                if word == 1 && pos == cross_b {
                    continue;
                }
                block.push(symbol(*cell, mode));
            }
        }
    }
    block
}

fn symbol(feedback: CellFeedback, mode: ClueMode) -> char {
    match feedback {
        CellFeedback::Correct => '🟩',
        CellFeedback::PresentSameWord => '🟨',
        CellFeedback::PresentCrossWord => match mode {
            ClueMode::PerWord => '🟧',
            ClueMode::Combined => '🟨',
        },
        CellFeedback::Absent => '⬜',
    }
}
