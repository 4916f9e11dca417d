// src/runner.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep};

use crate::config::AUTO_ADVANCE_DELAY;
use crate::controller::{AdvanceOutcome, QuizController, QuizStep, TickOutcome};
use crate::error::QuizError;
use crate::models::question::Difficulty;

/// Drives a shared controller with the one-second countdown.
///
/// At most one countdown task is live. It is bound to the timer epoch of
/// the question it was created for, and it is aborted whenever the player
/// answers, navigates, restarts or finishes. Aborting also cancels a
/// pending auto-advance, since that delay runs inside the same task. On
/// timeout the task keeps the "time's up" state visible for
/// `AUTO_ADVANCE_DELAY`, then advances and carries on with the next
/// question.
pub struct QuizRunner {
    controller: Arc<Mutex<QuizController>>,
    countdown: Option<JoinHandle<()>>,
}

impl QuizRunner {
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            countdown: None,
        }
    }

    /// Shared handle for presentation code that renders the state.
    pub fn controller(&self) -> Arc<Mutex<QuizController>> {
        Arc::clone(&self.controller)
    }

    pub async fn submit_username(&mut self, raw: &str) -> Result<(), QuizError> {
        self.controller.lock().await.submit_username(raw)
    }

    pub async fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<(), QuizError> {
        self.controller.lock().await.choose_difficulty(difficulty)?;
        self.rebind().await;
        Ok(())
    }

    pub async fn answer(&mut self, option_index: usize) -> Option<bool> {
        let outcome = self.controller.lock().await.answer(option_index);
        if outcome.is_some() {
            // The countdown for this question is over; it restarts when
            // the player moves on.
            self.cancel();
        }
        outcome
    }

    pub async fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        let outcome = self.controller.lock().await.advance().await?;
        match outcome {
            AdvanceOutcome::Next(_) => self.rebind().await,
            AdvanceOutcome::Finished => self.cancel(),
        }
        Ok(outcome)
    }

    pub async fn jump_to(&mut self, index: usize) -> Result<(), QuizError> {
        self.controller.lock().await.jump_to(index)?;
        self.rebind().await;
        Ok(())
    }

    pub async fn finish_early(&mut self) -> Result<(), QuizError> {
        self.controller.lock().await.finish_early().await?;
        self.cancel();
        Ok(())
    }

    pub async fn restart_same_difficulty(&mut self) -> Result<(), QuizError> {
        self.controller.lock().await.restart_same_difficulty()?;
        self.rebind().await;
        Ok(())
    }

    pub async fn restart_choose_difficulty(&mut self) -> Result<(), QuizError> {
        self.controller.lock().await.restart_choose_difficulty()?;
        self.cancel();
        Ok(())
    }

    pub async fn restart_full(&mut self) {
        self.controller.lock().await.restart_full();
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }

    /// Cancels the previous countdown and binds a new one to the
    /// question currently shown, if any.
    async fn rebind(&mut self) {
        self.cancel();

        let epoch = {
            let controller = self.controller.lock().await;
            if controller.step() != QuizStep::InProgress {
                return;
            }
            controller.timer_epoch()
        };

        let controller = Arc::clone(&self.controller);
        self.countdown = Some(tokio::spawn(run_countdown(controller, epoch)));
    }
}

impl Drop for QuizRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_countdown(controller: Arc<Mutex<QuizController>>, mut epoch: u64) {
    let mut ticker = interval(Duration::from_secs(1));
    // The first tick of a tokio interval completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let outcome = controller.lock().await.tick(epoch);
        match outcome {
            TickOutcome::Running(_) => {}
            TickOutcome::Stale => return,
            TickOutcome::TimedOut => {
                // Keep the "time's up" state visible before moving on.
                sleep(AUTO_ADVANCE_DELAY).await;

                let mut guard = controller.lock().await;
                match guard.advance().await {
                    Ok(AdvanceOutcome::Next(_)) => {
                        epoch = guard.timer_epoch();
                        drop(guard);
                        ticker = interval(Duration::from_secs(1));
                        ticker.tick().await;
                    }
                    _ => return,
                }
            }
        }
    }
}
