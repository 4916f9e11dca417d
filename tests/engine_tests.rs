// tests/engine_tests.rs

use quiz_engine::QuizController;
use quiz_engine::bank::QuestionBank;
use quiz_engine::catalog;
use quiz_engine::config::{LEADERBOARD_TOP_LIMIT, QUESTIONS_PER_SESSION};
use quiz_engine::controller::{AdvanceOutcome, QuizStep};
use quiz_engine::models::question::{Difficulty, QuizQuestion};
use quiz_engine::store::{LeaderboardStore, MemoryBackend};

/// Helper: make engine logs visible when tests run with RUST_LOG set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Helper: a bank with exactly `count` easy questions.
fn easy_bank(count: usize) -> QuestionBank {
    let questions: Vec<QuizQuestion> = (0..count)
        .map(|i| QuizQuestion {
            id: format!("e{}", i),
            difficulty: Difficulty::Easy,
            prompt: format!("Soal nomor {}", i + 1),
            options: vec!["A", "B", "C", "D"].into_iter().map(String::from).collect(),
            correct_index: i % 4,
            explanation: format!("Jawaban soal {}", i + 1),
        })
        .collect();
    QuestionBank::new(questions).unwrap()
}

fn controller_with(bank: QuestionBank) -> QuizController {
    let store = LeaderboardStore::new(Box::new(MemoryBackend::default()));
    QuizController::new(bank, store)
}

#[tokio::test]
async fn perfect_easy_run_tops_the_leaderboard() {
    // Arrange: a bank with exactly ten easy questions.
    init_tracing();
    let mut controller = controller_with(easy_bank(10));
    controller.submit_username("Budi").unwrap();

    // Act: pick the tier and answer everything correctly.
    controller.choose_difficulty(Difficulty::Easy).unwrap();
    assert_eq!(controller.session().unwrap().total(), QUESTIONS_PER_SESSION);

    loop {
        let correct = controller.current_question().unwrap().correct_index;
        assert_eq!(controller.answer(correct), Some(true));
        if controller.advance().await.unwrap() == AdvanceOutcome::Finished {
            break;
        }
    }

    // Assert: perfect score, recorded at rank 0 for the tier.
    assert_eq!(controller.step(), QuizStep::Finished);
    let session = controller.session().unwrap();
    assert_eq!(session.score(), 10);
    assert_eq!(session.total(), 10);

    let top = controller
        .leaderboard(Difficulty::Easy, LEADERBOARD_TOP_LIMIT)
        .await;
    assert_eq!(top[0].player, "Budi");
    assert_eq!(top[0].score, 10);
    assert_eq!(top[0].percentage, 100);
}

#[tokio::test]
async fn skipped_questions_come_back_before_finishing() {
    // Arrange
    let mut controller = controller_with(easy_bank(3));
    controller.submit_username("Sari").unwrap();
    controller.choose_difficulty(Difficulty::Easy).unwrap();

    // Act: answer only the middle question, then keep advancing.
    controller.jump_to(1).unwrap();
    let correct = controller.current_question().unwrap().correct_index;
    controller.answer(correct).unwrap();

    // Advance must visit the two remaining unanswered questions (2, then
    // wrap to 0) before the session can finish.
    assert_eq!(controller.advance().await.unwrap(), AdvanceOutcome::Next(2));
    let correct = controller.current_question().unwrap().correct_index;
    controller.answer(correct).unwrap();

    assert_eq!(controller.advance().await.unwrap(), AdvanceOutcome::Next(0));
    let wrong = (controller.current_question().unwrap().correct_index + 1) % 4;
    controller.answer(wrong).unwrap();

    // Assert
    assert_eq!(controller.advance().await.unwrap(), AdvanceOutcome::Finished);
    let session = controller.session().unwrap();
    assert_eq!(session.score(), 2);
    assert_eq!(session.answered_count(), 3);
}

#[tokio::test]
async fn early_finish_records_partial_score() {
    // Arrange
    let mut controller = controller_with(easy_bank(10));
    controller.submit_username("Andi").unwrap();
    controller.choose_difficulty(Difficulty::Easy).unwrap();

    // Act: answer three questions, then bail out.
    for _ in 0..3 {
        let correct = controller.current_question().unwrap().correct_index;
        controller.answer(correct).unwrap();
        controller.advance().await.unwrap();
    }
    controller.finish_early().await.unwrap();

    // Assert: score counts only what was actually answered.
    let top = controller
        .leaderboard(Difficulty::Easy, LEADERBOARD_TOP_LIMIT)
        .await;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].score, 3);
    assert_eq!(top[0].total, 10);
    assert_eq!(top[0].percentage, 30);
}

#[tokio::test]
async fn retry_with_fresh_questions_adds_a_second_entry() {
    // Arrange
    let mut controller = controller_with(easy_bank(10));
    controller.submit_username("Dewi").unwrap();
    controller.choose_difficulty(Difficulty::Easy).unwrap();
    controller.finish_early().await.unwrap();

    // Act: "Ulangi (Soal Baru)": same tier, brand-new session.
    controller.restart_same_difficulty().unwrap();
    assert_eq!(controller.step(), QuizStep::InProgress);
    assert_eq!(controller.session().unwrap().answered_count(), 0);

    let correct = controller.current_question().unwrap().correct_index;
    controller.answer(correct).unwrap();
    controller.finish_early().await.unwrap();

    // Assert: both runs are on the board, better one first.
    let top = controller
        .leaderboard(Difficulty::Easy, LEADERBOARD_TOP_LIMIT)
        .await;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].score, 1);
    assert_eq!(top[1].score, 0);
}

#[tokio::test]
async fn bundled_catalogue_supports_every_tier() {
    // Arrange: the engine wired exactly as presentation code does it.
    let mut controller = controller_with(catalog::default_bank());
    controller.submit_username("Tim Fisika").unwrap();

    for difficulty in Difficulty::ALL {
        // Act
        controller.choose_difficulty(difficulty).unwrap();

        // Assert: a full session per tier, every question well formed.
        let session = controller.session().unwrap();
        assert_eq!(session.total(), QUESTIONS_PER_SESSION);
        assert!(session.questions.iter().all(|q| q.difficulty == difficulty));
        assert!(session.questions.iter().all(|q| q.options.len() == 4));

        controller.finish_early().await.unwrap();
    }
}

#[test]
fn rejected_username_blocks_the_flow() {
    // Arrange
    let mut controller = controller_with(easy_bank(3));

    // Act + Assert: the gate holds until a valid name is given.
    assert!(controller.submit_username("a").is_err());
    assert_eq!(controller.step(), QuizStep::AwaitingPlayer);
    assert!(controller.choose_difficulty(Difficulty::Easy).is_err());

    controller.submit_username("ab").unwrap();
    assert_eq!(controller.step(), QuizStep::AwaitingDifficulty);
}
