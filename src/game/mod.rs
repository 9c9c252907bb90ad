use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

pub mod error;
pub mod quiz;
pub mod settings;


use self::error::QuizError;
use self::quiz::definition::{PoolShape, QuestionPool};
use self::quiz::results::{ResultsSummary, SummaryCountdown};
use self::quiz::session::QuizSession;
use self::quiz::QuestionCount;
use self::settings::Settings;
use crate::output::{Message, QuizOutput};

#[derive(Debug)]
enum Phase {
    Upload,
    Selection(QuestionPool),
    Quiz {
        pool: QuestionPool,
        session: QuizSession,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Upload => "upload",
            Phase::Selection(_) => "selection",
            Phase::Quiz { .. } => "quiz",
        }
    }

    fn get_pool(&self) -> Option<&QuestionPool> {
        match self {
            Phase::Upload => None,
            Phase::Selection(pool) => Some(pool),
            Phase::Quiz { pool, .. } => Some(pool),
        }
    }
}

fn active_session(phase: &mut Phase) -> Result<&mut QuizSession, QuizError> {
    match phase {
        Phase::Quiz { session, .. } => Ok(session),
        _ => Err(QuizError::NoActiveSession),
    }
}

/// Accepts user intents, keeps the pool and the running session, and reports
/// every visible change to its output.
pub struct Game<O: QuizOutput> {
    current_phase: Phase,
    settings: Settings,
    pending_summary: Option<SummaryCountdown>,
    rng: StdRng,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(output: O, settings: Settings) -> Game<O> {
        Game::with_rng(output, settings, StdRng::from_entropy())
    }

    pub fn with_rng(output: O, settings: Settings, rng: StdRng) -> Game<O> {
        Game {
            current_phase: Phase::Upload,
            settings,
            pending_summary: None,
            rng,
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering game phase: {}", phase.name());
        self.current_phase = phase;
    }

    pub fn get_pool(&self) -> Option<&QuestionPool> {
        self.current_phase.get_pool()
    }

    pub fn get_session(&self) -> Option<&QuizSession> {
        match &self.current_phase {
            Phase::Quiz { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn is_summary_pending(&self) -> bool {
        self.pending_summary.is_some()
    }

    pub fn load_file(&mut self, raw_text: &str) -> Result<(), QuizError> {
        self.load(raw_text, None)
    }

    pub fn load_file_with_shape(&mut self, raw_text: &str, shape: PoolShape) -> Result<(), QuizError> {
        self.load(raw_text, Some(shape))
    }

    fn load(&mut self, raw_text: &str, shape: Option<PoolShape>) -> Result<(), QuizError> {
        let pool = match QuestionPool::parse(raw_text, shape) {
            Ok(pool) => pool,
            Err(e) => {
                self.output.say(&Message::NoValidQuestions);
                return Err(e);
            }
        };
        self.offer_pool(pool);
        Ok(())
    }

    fn offer_pool(&mut self, pool: QuestionPool) {
        self.output.say(&Message::PoolReady {
            pool: pool.clone(),
            size: pool.len(),
            presets: self.settings.preset_counts.clone(),
        });
        self.set_current_phase(Phase::Selection(pool));
    }

    /// Starts a session from a count typed in by the user.
    pub fn start_custom_session(&mut self, input: &str) -> Result<(), QuizError> {
        match input.parse::<QuestionCount>() {
            Ok(count) => self.start_session(count),
            Err(e) => {
                self.output.say(&Message::InvalidCustomCount(input.trim().to_owned()));
                Err(e)
            }
        }
    }

    pub fn start_session(&mut self, count: QuestionCount) -> Result<(), QuizError> {
        let pool = match &self.current_phase {
            Phase::Selection(pool) => pool.clone(),
            _ => return Err(QuizError::NoPoolLoaded),
        };

        let limit = match count {
            QuestionCount::All => pool.len(),
            QuestionCount::Exactly(0) => {
                self.output.say(&Message::InvalidCustomCount("0".to_owned()));
                return Err(QuizError::InvalidCustomCount("0".to_owned()));
            }
            QuestionCount::Exactly(requested) if requested > pool.len() => {
                warn!(
                    "Requested {} questions but only {} are available",
                    requested,
                    pool.len()
                );
                self.output.say(&Message::CountClamped {
                    requested,
                    available: pool.len(),
                });
                pool.len()
            }
            QuestionCount::Exactly(requested) => requested,
        };

        let questions = pool.draw(limit, &mut self.rng);
        let session = QuizSession::new(questions, &mut self.rng)?;
        info!("Starting quiz with {} questions", session.len());
        self.set_current_phase(Phase::Quiz { pool, session });
        self.announce_current_question();
        self.announce_score();
        Ok(())
    }

    pub fn select_option(&mut self, value: &str) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        if let Err(e) = session.select_option(value) {
            debug!("Ignoring selection: {}", e);
            return Err(e);
        }
        self.output.say(&Message::OptionSelected(value.to_owned()));
        Ok(())
    }

    pub fn submit_selected(&mut self) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        let outcome = match session.submit_selected() {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("Ignoring submit: {}", e);
                return Err(e);
            }
        };

        self.output.say(&Message::Answered {
            is_correct: outcome.is_correct,
            correct_answer: outcome.correct_answer,
        });
        self.output.say(&Message::ScoreUpdate {
            score: session.score(),
            answered: session.answered_count(),
        });

        if outcome.completes_session {
            let summary = ResultsSummary::from_session(session)?;
            info!(
                "Quiz complete: {}/{} ({}%)",
                summary.correct, summary.total, summary.percentage
            );
            self.pending_summary = Some(SummaryCountdown::new(summary, self.settings.summary_delay));
        }
        Ok(())
    }

    pub fn go_next(&mut self) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        if let Err(e) = session.next() {
            debug!("Ignoring next: {}", e);
            return Err(e);
        }
        self.announce_current_question();
        Ok(())
    }

    pub fn go_previous(&mut self) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        if let Err(e) = session.previous() {
            debug!("Ignoring previous: {}", e);
            return Err(e);
        }
        self.announce_current_question();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        session.restart(&mut self.rng);
        info!("Restarting quiz with the same {} questions", session.len());
        self.announce_current_question();
        self.announce_score();
        Ok(())
    }

    pub fn review_from_start(&mut self) -> Result<(), QuizError> {
        let session = active_session(&mut self.current_phase)?;
        if let Err(e) = session.review_from_start() {
            debug!("Ignoring review: {}", e);
            return Err(e);
        }
        self.announce_current_question();
        Ok(())
    }

    /// Goes back to picking a session size, keeping the loaded questions.
    pub fn start_new_from_same_pool(&mut self) -> Result<(), QuizError> {
        let pool = match self.current_phase.get_pool() {
            Some(pool) if !pool.is_empty() => pool.clone(),
            _ => {
                self.output.say(&Message::NoQuestionsAvailable);
                return Err(QuizError::NoPoolLoaded);
            }
        };
        self.offer_pool(pool);
        Ok(())
    }

    /// Forgets the loaded questions and any session.
    pub fn reset_to_upload(&mut self) {
        self.set_current_phase(Phase::Upload);
        self.output.say(&Message::AwaitingUpload);
    }

    /// Advances the results countdown. The summary is announced once, even if
    /// the session was restarted or discarded in the meantime.
    pub fn tick(&mut self, dt: Duration) {
        let is_over = match &mut self.pending_summary {
            Some(countdown) => {
                countdown.on_tick(dt);
                countdown.is_over()
            }
            None => false,
        };
        if is_over {
            if let Some(countdown) = self.pending_summary.take() {
                self.output
                    .say(&Message::SessionComplete(countdown.into_summary()));
            }
        }
    }

    fn announce_current_question(&self) {
        if let Some(session) = self.get_session() {
            self.output.say(&Message::QuestionChanged {
                question: session.current().clone(),
                index: session.current_index(),
                total: session.len(),
            });
        }
    }

    fn announce_score(&self) {
        if let Some(session) = self.get_session() {
            self.output.say(&Message::ScoreUpdate {
                score: session.score(),
                answered: session.answered_count(),
            });
        }
    }
}
