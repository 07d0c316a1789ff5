#[macro_use]
extern crate assert_matches;

use crosswordle::*;

fn lexicon() -> Dictionary {
    Dictionary::from_iterator(vec![
        "cat", "arm", "cap", "cot", "mat", "tat", "bat", "ars", "ack", "orm", "car",
    ])
}

#[test]
fn submitting_the_answer_wins_the_game() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    let feedback = session.submit("cat", "arm", &lexicon())?;
    assert!(feedback.is_winning());

    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.history().len(), 1);
    Ok(())
}

#[test]
fn finished_games_accept_no_further_guesses() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);
    session.submit("cat", "arm", &lexicon())?;

    assert_matches!(
        session.submit("cap", "arm", &lexicon()),
        Err(GameError::GameOver)
    );
    assert_eq!(session.history().len(), 1);
    Ok(())
}

#[test]
fn near_miss_keeps_the_game_in_progress() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    let feedback = session.submit("cap", "arm", &lexicon())?;

    assert_eq!(
        feedback.word_cells(0),
        &[
            CellFeedback::Correct,
            CellFeedback::Correct,
            CellFeedback::Absent
        ]
    );
    // The vertical word's tiles, with the shared tile mirroring the horizontal result.
    assert_eq!(feedback.cell(Cell::new(1, 0)), CellFeedback::Correct);
    assert_eq!(feedback.cell(Cell::new(1, 1)), CellFeedback::Correct);
    assert_eq!(feedback.cell(Cell::new(1, 2)), CellFeedback::Correct);
    assert_eq!(feedback.wrong_count(), 1);
    assert_eq!(session.status(), GameStatus::InProgress);
    Ok(())
}

#[test]
fn hard_mode_rejects_contradicting_guesses_without_consuming_them() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, true);
    session.submit("cap", "arm", &lexicon())?;

    // 'c', 'a', 'r', and 'm' are all confirmed now; "bat"/"ack" drops them.
    let result = session.submit("bat", "ack", &lexicon());

    assert_matches!(result, Err(GameError::HardMode(_)));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.status(), GameStatus::InProgress);

    // A consistent guess is still accepted afterwards.
    session.submit("cat", "arm", &lexicon())?;
    assert_eq!(session.status(), GameStatus::Won);
    Ok(())
}

#[test]
fn easy_mode_never_blocks_contradicting_guesses() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);
    session.submit("cap", "arm", &lexicon())?;

    assert!(session.submit("bat", "ack", &lexicon()).is_ok());
    Ok(())
}

#[test]
fn unrecognized_words_are_rejected_without_consuming_the_guess() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    let result = session.submit("caz", "arm", &lexicon());

    assert_eq!(result, Err(GameError::UnrecognizedWord("caz".into())));
    assert_eq!(session.history().len(), 0);
    Ok(())
}

#[test]
fn answer_words_are_always_recognized() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let empty = Dictionary::from_iterator(Vec::<&str>::new());
    let mut session = GameSession::new(puzzle, false);

    session.submit("cat", "arm", &empty)?;

    assert_eq!(session.status(), GameStatus::Won);
    Ok(())
}

#[test]
fn incomplete_guesses_are_rejected_before_scoring() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    assert_matches!(
        session.submit("ca", "arm", &lexicon()),
        Err(GameError::IncompleteGuess)
    );
    assert_eq!(session.history().len(), 0);
    Ok(())
}

#[test]
fn exhausting_the_guess_limit_loses_the_game() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    for _ in 0..MAX_GUESSES {
        session.submit("cap", "arm", &lexicon())?;
    }

    assert_eq!(session.status(), GameStatus::Lost);
    assert_matches!(
        session.submit("cat", "arm", &lexicon()),
        Err(GameError::GameOver)
    );
    Ok(())
}

#[test]
fn winning_on_the_final_guess_is_still_a_win() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);

    for _ in 0..MAX_GUESSES - 1 {
        session.submit("cap", "arm", &lexicon())?;
    }
    session.submit("cat", "arm", &lexicon())?;

    assert_eq!(session.status(), GameStatus::Won);
    Ok(())
}

#[test]
fn hard_mode_can_be_toggled_freely_before_the_first_guess() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);
    assert_eq!(session.clue_mode(), ClueMode::PerWord);

    assert!(session.set_hard_mode(true));
    assert!(session.hard_mode());
    assert_eq!(session.clue_mode(), ClueMode::Combined);
    Ok(())
}

#[test]
fn hard_mode_only_ratchets_down_mid_game() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, true);
    session.submit("cap", "arm", &lexicon())?;

    // Relaxing applies immediately, but the clue mode stays as fixed at the first guess.
    assert!(session.set_hard_mode(false));
    assert!(!session.hard_mode());
    assert_eq!(session.clue_mode(), ClueMode::Combined);

    // Tightening again must wait for the next session.
    assert!(!session.set_hard_mode(true));
    assert!(!session.hard_mode());
    Ok(())
}

#[test]
fn session_summary_reflects_the_whole_history() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle, false);
    session.submit("cap", "arm", &lexicon())?;
    session.submit("cat", "arm", &lexicon())?;

    assert_eq!(session.summary(), "🟩🟩⬜ 🟩🟩\n🟩🟩🟩 🟩🟩");
    Ok(())
}

#[test]
fn restore_replays_saved_guesses_through_the_pipeline() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let mut session = GameSession::new(puzzle.clone(), true);
    session.submit("cap", "arm", &lexicon())?;
    session.submit("car", "arm", &lexicon())?;
    let saved = session.save(Some(42), "en");

    let restored = GameSession::restore(puzzle, &saved)?;

    assert_eq!(restored.status(), session.status());
    assert_eq!(restored.history().len(), session.history().len());
    assert_eq!(restored.summary(), session.summary());
    assert_eq!(restored.clue_mode(), session.clue_mode());
    assert_eq!(
        restored.clues().confirmed_letter(Cell::new(0, 0)),
        Some('c')
    );
    assert!(saved.matches(Some(42), "en"));
    assert!(!saved.matches(Some(42), "fr"));
    Ok(())
}

#[test]
fn restore_rejects_corrupted_records() -> Result<(), GameError> {
    let puzzle = Puzzle::new("cat", "arm")?;
    let saved = SavedSession {
        day: None,
        lang: "en".to_string(),
        hard_mode: false,
        combined_clues: false,
        guesses: vec!["cap".to_string()],
    };

    assert_matches!(
        GameSession::restore(puzzle, &saved),
        Err(GameError::IncompleteGuess)
    );
    Ok(())
}
