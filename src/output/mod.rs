use crate::game::quiz::definition::{QuestionPool, QuestionRecord};
use crate::game::quiz::results::ResultsSummary;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Answered {
        is_correct: bool,
        correct_answer: String,
    },
    AwaitingUpload,
    CountClamped {
        requested: usize,
        available: usize,
    },
    InvalidCustomCount(String),
    NoQuestionsAvailable,
    NoValidQuestions,
    OptionSelected(String),
    PoolReady {
        pool: QuestionPool,
        size: usize,
        presets: Vec<usize>,
    },
    QuestionChanged {
        question: QuestionRecord,
        index: usize,
        total: usize,
    },
    ScoreUpdate {
        score: usize,
        answered: usize,
    },
    SessionComplete(ResultsSummary),
}

/// Presentation layer notified by the game. Implementations only render.
pub trait QuizOutput {
    fn say(&self, message: &Message);
}
