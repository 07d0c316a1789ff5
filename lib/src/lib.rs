mod clues;
mod data;
mod engine;
mod evaluator;
mod hints;
mod puzzle;
mod results;
mod share;

pub use clues::ClueBoard;
pub use clues::ClueMode;
pub use clues::HardModeViolation;
pub use data::random_puzzle;
pub use data::Dictionary;
pub use data::Lexicon;
pub use engine::*;
pub use evaluator::evaluate;
pub use hints::project;
pub use hints::CellHint;
pub use hints::HintView;
pub use hints::KeyHint;
pub use hints::PartialEntry;
pub use puzzle::Cell;
pub use puzzle::Puzzle;
pub use results::*;
pub use share::decode_text;
pub use share::encode_text;
pub use share::puzzle_code;
pub use share::puzzle_from_code;
pub use share::summary;
