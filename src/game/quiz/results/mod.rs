use std::time::Duration;

use crate::game::error::QuizError;
use crate::game::quiz::session::QuizSession;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultsSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub percentage: u32,
}

impl ResultsSummary {
    pub fn new(total: usize, correct: usize) -> Self {
        ResultsSummary {
            total,
            correct,
            incorrect: total.saturating_sub(correct),
            percentage: compute_percentage(correct, total),
        }
    }

    pub fn from_session(session: &QuizSession) -> Result<Self, QuizError> {
        if !session.is_complete() {
            return Err(QuizError::NotComplete);
        }
        Ok(ResultsSummary::new(session.len(), session.score()))
    }
}

// Rounds half up, in integers so that 12.5% is always 13%.
fn compute_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (2 * total)) as u32
}

/// Holds a finished session's summary until the display delay runs out.
#[derive(Debug)]
pub struct SummaryCountdown {
    summary: ResultsSummary,
    time_elapsed: Duration,
    time_to_wait: Duration,
}

impl SummaryCountdown {
    pub fn new(summary: ResultsSummary, delay: Duration) -> Self {
        SummaryCountdown {
            summary,
            time_elapsed: Duration::default(),
            time_to_wait: delay,
        }
    }

    pub fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    pub fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }

    pub fn into_summary(self) -> ResultsSummary {
        self.summary
    }
}
