use clap::{Parser, Subcommand};
use crosswordle::*;
use std::error::Error;
use std::fs::File;
use std::io;

/// Simple program to create and play Crosswordle puzzles: two crossing words, guessed together.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the accepted words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a shareable code for a custom puzzle built from two crossing words.
    Create { word_a: String, word_b: String },
    /// Decode a shareable code and show the puzzle it contains.
    Decode { code: String },
    /// Play a puzzle interactively.
    Play {
        /// A shareable code to play. A random puzzle is drawn from the word list when omitted.
        #[clap(long)]
        code: Option<String>,
        /// Reject guesses that contradict the clues revealed so far.
        #[clap(long)]
        hard: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(&mut words_reader)?;

    match args.command {
        Command::Create { word_a, word_b } => create_puzzle(&word_a, &word_b, &dictionary)?,
        Command::Decode { code } => {
            let puzzle = puzzle_from_code(&code)?;
            println!(
                "{} + {}, crossing on '{}'.",
                puzzle.word(0),
                puzzle.word(1),
                puzzle.crossing_letter()
            );
        }
        Command::Play { code, hard } => {
            let puzzle = match code {
                Some(code) => puzzle_from_code(&code)?,
                None => random_puzzle(&dictionary)?,
            };
            play_game(puzzle, hard, &dictionary)?;
        }
    }

    Ok(())
}

fn create_puzzle(
    word_a: &str,
    word_b: &str,
    dictionary: &Dictionary,
) -> Result<(), Box<dyn Error>> {
    for word in [word_a, word_b] {
        if !dictionary.is_valid(&word.to_lowercase()) {
            eprintln!("Error: '{}' is not in the word list.", word);
            std::process::exit(1);
        }
    }
    let puzzle = Puzzle::new(word_a, word_b)?;
    println!(
        "The words cross on '{}'. Share this code: {}",
        puzzle.crossing_letter(),
        puzzle_code(&puzzle)
    );
    Ok(())
}

fn play_game(puzzle: Puzzle, hard: bool, dictionary: &Dictionary) -> io::Result<()> {
    let mut session = GameSession::new(puzzle, hard);
    println!(
        "The horizontal word has {} letters and the vertical word has {}.\n\
         You have {} guesses. Enter both words separated by a space, or 'quit'.\n\n\
         Feedback per letter:\n\n\
           * 'G' = correct\n\
           * 'Y' = in this word, somewhere else\n\
           * 'O' = in the other word\n\
           * '.' = not available in either word",
        session.puzzle().word_len(0),
        session.puzzle().word_len(1),
        MAX_GUESSES,
    );
    print_grid(&session);

    while session.status() == GameStatus::InProgress {
        println!(
            "\nGuess {} of {}:",
            session.history().len() + 1,
            MAX_GUESSES
        );
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            return Ok(());
        }
        let input = buffer.trim();
        if input == "quit" {
            return Ok(());
        }
        let mut words = input.split_whitespace();
        let (word_a, word_b) = match (words.next(), words.next()) {
            (Some(word_a), Some(word_b)) => (word_a, word_b),
            _ => {
                println!("Enter exactly two words.");
                continue;
            }
        };

        let outcome = session
            .submit(word_a, word_b, dictionary)
            .map(GuessFeedback::clone);
        match outcome {
            Ok(feedback) => {
                print_feedback(&feedback, session.clue_mode());
                print_grid(&session);
                print_letter_hints(&session);
            }
            Err(error) => println!("{}", error),
        }
    }

    let guesses = session.history().len();
    match session.status() {
        GameStatus::Won => println!("\nSolved it! It took you {} guesses.", guesses),
        _ => println!(
            "\nOut of guesses. The words were '{}' and '{}'.",
            session.puzzle().word(0),
            session.puzzle().word(1)
        ),
    }
    let indicator = match session.clue_mode() {
        ClueMode::PerWord => "🔸",
        ClueMode::Combined => "",
    };
    println!("\nCrosswordle {}/{}{}", guesses, MAX_GUESSES, indicator);
    println!("{}", session.summary());
    Ok(())
}

/// Prints one guess's words with a feedback mark under each letter.
fn print_feedback(feedback: &GuessFeedback, mode: ClueMode) {
    for word in 0..2 {
        let letters: Vec<String> = feedback
            .guess()
            .word(word)
            .chars()
            .map(|letter| letter.to_ascii_uppercase().to_string())
            .collect();
        let marks: Vec<String> = feedback
            .word_cells(word)
            .iter()
            .map(|cell| feedback_mark(*cell, mode).to_string())
            .collect();
        println!("  {}", letters.join(" "));
        println!("  {}", marks.join(" "));
    }
}

fn feedback_mark(feedback: CellFeedback, mode: ClueMode) -> char {
    match feedback {
        CellFeedback::Correct => 'G',
        CellFeedback::PresentSameWord => 'Y',
        CellFeedback::PresentCrossWord => match mode {
            ClueMode::PerWord => 'O',
            ClueMode::Combined => 'Y',
        },
        CellFeedback::Absent => '.',
    }
}

/// Draws the crossing grid, filling tiles whose letters are already confirmed.
fn print_grid(session: &GameSession) {
    let puzzle = session.puzzle();
    let [cross_a, cross_b] = puzzle.offsets();
    println!();
    for row in 0..puzzle.word_len(1) {
        let mut line = String::new();
        if row == cross_b {
            for pos in 0..puzzle.word_len(0) {
                line.push(tile_char(session, Cell::new(0, pos as u8)));
                line.push(' ');
            }
        } else {
            for _ in 0..cross_a {
                line.push_str("  ");
            }
            line.push(tile_char(session, Cell::new(1, row as u8)));
        }
        println!("  {}", line.trim_end());
    }
}

fn tile_char(session: &GameSession, cell: Cell) -> char {
    match session.clues().confirmed_letter(cell) {
        Some(letter) => letter.to_ascii_uppercase(),
        None => '.',
    }
}

/// Summarizes the keyboard hints for an empty entry: which letters are still owed, and which
/// are used up.
fn print_letter_hints(session: &GameSession) {
    let hints = project(session.clues(), &PartialEntry::new(session.puzzle()), 0);
    let mut needed = Vec::new();
    let mut spent = Vec::new();
    for letter in 'a'..='z' {
        let key = hints.key(letter);
        if key.needs_confirmed || key.missing || key.missing_cross {
            needed.push(letter.to_ascii_uppercase().to_string());
        } else if key.spent {
            spent.push(letter.to_ascii_uppercase().to_string());
        }
    }
    if !needed.is_empty() {
        println!("Still needed: {}", needed.join(" "));
    }
    if !spent.is_empty() {
        println!("Used up: {}", spent.join(" "));
    }
}
