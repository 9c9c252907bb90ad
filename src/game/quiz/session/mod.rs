use rand::Rng;

use crate::game::error::QuizError;
use crate::game::quiz::definition::QuestionRecord;
use crate::game::quiz::shuffle::shuffle;


/// Where the session stands on its current question.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionState {
    Answering(usize),
    Answered(usize),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub completes_session: bool,
}

/// One run through a set of questions.
///
/// Questions are answered in order: moving forward requires the current
/// question to be answered, moving backward is always allowed. Once the last
/// question has an answer the session is complete.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current_index: usize,
    score: usize,
    pending_selection: Option<String>,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(
        questions: Vec<QuestionRecord>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoValidQuestions);
        }
        let mut session = QuizSession {
            questions,
            current_index: 0,
            score: 0,
            pending_selection: None,
        };
        session.reset(rng);
        Ok(session)
    }

    pub fn get_questions(&self) -> &Vec<QuestionRecord> {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &QuestionRecord {
        &self.questions[self.current_index]
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending_selection.as_deref()
    }

    pub fn state(&self) -> QuestionState {
        if self.current().is_answered() {
            QuestionState::Answered(self.current_index)
        } else {
            QuestionState::Answering(self.current_index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.questions
            .last()
            .map(|q| q.is_answered())
            .unwrap_or(false)
    }

    pub fn select_option(&mut self, choice: &str) -> Result<(), QuizError> {
        if self.current().is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        self.pending_selection = Some(choice.to_owned());
        Ok(())
    }

    pub fn submit_selected(&mut self) -> Result<AnswerOutcome, QuizError> {
        if self.current().is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        let choice = self
            .pending_selection
            .clone()
            .ok_or(QuizError::NoSelectionOnSubmit)?;
        self.submit(&choice)
    }

    pub fn submit(&mut self, choice: &str) -> Result<AnswerOutcome, QuizError> {
        let question = &mut self.questions[self.current_index];
        if question.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }

        let is_correct = question.record_answer(choice);
        let correct_answer = question.correct_answer.clone();
        if is_correct {
            self.score += 1;
        }
        self.pending_selection = None;

        Ok(AnswerOutcome {
            is_correct,
            correct_answer,
            completes_session: self.is_complete(),
        })
    }

    pub fn next(&mut self) -> Result<(), QuizError> {
        match self.state() {
            QuestionState::Answering(_) => Err(QuizError::NotAnswered),
            QuestionState::Answered(i) if i + 1 >= self.len() => Err(QuizError::AtLastQuestion),
            QuestionState::Answered(i) => {
                self.move_to(i + 1);
                Ok(())
            }
        }
    }

    pub fn previous(&mut self) -> Result<(), QuizError> {
        if self.current_index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.move_to(self.current_index - 1);
        Ok(())
    }

    /// Clears every answer and the score, reshuffles each question's options
    /// and goes back to the first question. The question set is kept.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset(rng);
    }

    /// Walks back to the first question of a complete session, answers intact.
    pub fn review_from_start(&mut self) -> Result<(), QuizError> {
        if !self.is_complete() {
            return Err(QuizError::NotComplete);
        }
        self.move_to(0);
        Ok(())
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for question in self.questions.iter_mut() {
            question.clear_answer();
            question.options = shuffle(&question.options, rng);
        }
        self.score = 0;
        self.move_to(0);
    }

    fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.pending_selection = None;
    }
}
