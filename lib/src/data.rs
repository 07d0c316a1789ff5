use crate::puzzle::Puzzle;
use crate::results::GameError;
use std::collections::HashSet;
use std::io;
use std::io::BufRead;
use std::rc::Rc;

/// Decides whether a word may be played. The engine treats the answer as authoritative.
pub trait Lexicon {
    /// Returns `true` iff the given word is an accepted word.
    fn is_valid(&self, word: &str) -> bool;
}

/// Contains all the accepted words for one language.
pub struct Dictionary {
    all_words: Vec<Rc<str>>,
    index: HashSet<Rc<str>>,
    max_word_length: usize,
}

impl Dictionary {
    /// Constructs a new `Dictionary` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be converted to lower case.
    /// Empty lines and duplicate words are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> io::Result<Self> {
        let mut dictionary = Dictionary {
            all_words: Vec::new(),
            index: HashSet::new(),
            max_word_length: 0,
        };
        for maybe_word in word_reader.lines() {
            dictionary.insert(maybe_word?.as_str());
        }
        Ok(dictionary)
    }

    /// Constructs a new `Dictionary` struct using the words from the given iterator.
    ///
    /// Each word will be converted to lower case. Empty and duplicate words are skipped.
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary {
            all_words: Vec::new(),
            index: HashSet::new(),
            max_word_length: 0,
        };
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        let word: Rc<str> = Rc::from(word.as_str());
        if self.index.insert(Rc::clone(&word)) {
            if self.max_word_length < word.len() {
                self.max_word_length = word.len();
            }
            self.all_words.push(word);
        }
    }

    /// Retrieves the full list of accepted words, in insertion order.
    pub fn all_words(&self) -> &[Rc<str>] {
        &self.all_words
    }

    /// Returns the number of accepted words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of the longest accepted word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_length
    }

    /// Returns `true` iff the given word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

impl Lexicon for Dictionary {
    fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Builds a puzzle from a random pair of distinct dictionary words with a common letter.
///
/// Fails with [`GameError::NoCommonLetter`] if the dictionary yields no crossable pair.
pub fn random_puzzle(dictionary: &Dictionary) -> Result<Puzzle, GameError> {
    let words = dictionary.all_words();
    if words.len() > 1 {
        // A few random draws almost always find a crossing pair; scan as a last resort.
        for _ in 0..64 {
            let word_a = &words[rand::random::<usize>() % words.len()];
            let word_b = &words[rand::random::<usize>() % words.len()];
            if word_a == word_b {
                continue;
            }
            if let Ok(puzzle) = Puzzle::new(word_a, word_b) {
                return Ok(puzzle);
            }
        }
        for word_a in words {
            for word_b in words {
                if word_a == word_b {
                    continue;
                }
                if let Ok(puzzle) = Puzzle::new(word_a, word_b) {
                    return Ok(puzzle);
                }
            }
        }
    }
    Err(GameError::NoCommonLetter)
}
