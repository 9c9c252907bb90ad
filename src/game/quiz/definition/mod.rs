use log::{debug, info};
use rand::Rng;

use crate::game::error::QuizError;
use crate::game::quiz::shuffle::shuffle;

pub mod csv;
pub mod question;

pub use question::{parse_enriched_choices, QuestionRecord};


/// Layout of the rows in an uploaded file. One layout applies to the whole file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolShape {
    /// `question, correct answer, <ignored>, enriched choices`
    Rich,
    /// `question, correct answer, other answers...`
    Simple,
}

impl PoolShape {
    /// Picks the layout for a whole file. A first row with fewer than four
    /// fields means simple. Otherwise the file is rich when any row of at
    /// least four fields has a fourth column holding several choices.
    pub fn detect(rows: &[Vec<String>]) -> PoolShape {
        let first_row = match rows.first() {
            Some(row) => row,
            None => return PoolShape::Rich,
        };
        if first_row.len() < question::RICH_MIN_FIELDS {
            return PoolShape::Simple;
        }
        let has_enriched_choices = rows
            .iter()
            .filter(|row| row.len() >= question::RICH_MIN_FIELDS)
            .any(|row| parse_enriched_choices(&row[question::RICH_CHOICES_COLUMN]).len() > 1);
        if has_enriched_choices {
            PoolShape::Rich
        } else {
            PoolShape::Simple
        }
    }

    fn extract(&self, fields: &[String]) -> Option<QuestionRecord> {
        match self {
            PoolShape::Rich => question::extract_rich(fields),
            PoolShape::Simple => question::extract_simple(fields),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionPool {
    questions: Vec<QuestionRecord>,
    shape: PoolShape,
}

impl QuestionPool {
    /// Extracts every usable question from `text`. When `shape` is `None` the
    /// layout is detected from the rows.
    pub fn parse(text: &str, shape: Option<PoolShape>) -> Result<QuestionPool, QuizError> {
        let rows = csv::parse_document(text);
        let shape = shape.unwrap_or_else(|| PoolShape::detect(&rows));

        let questions: Vec<QuestionRecord> =
            rows.iter().filter_map(|row| shape.extract(row)).collect();

        let dropped = rows.len() - questions.len();
        if dropped > 0 {
            debug!("Dropped {} rows without usable options", dropped);
        }

        if questions.is_empty() {
            return Err(QuizError::NoValidQuestions);
        }

        info!("Loaded {} questions ({:?} layout)", questions.len(), shape);
        Ok(QuestionPool { questions, shape })
    }

    pub fn get_questions(&self) -> &Vec<QuestionRecord> {
        &self.questions
    }

    pub fn shape(&self) -> PoolShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Picks `limit` distinct questions at random. The pool itself is untouched.
    pub fn draw<R: Rng + ?Sized>(&self, limit: usize, rng: &mut R) -> Vec<QuestionRecord> {
        let mut drawn = shuffle(&self.questions, rng);
        drawn.truncate(limit);
        drawn
    }
}
