use lazy_static::lazy_static;
use regex::Regex;


lazy_static! {
    static ref CHOICE_MARKER_REGEX: Regex = Regex::new(r"[A-Z]\)\s*").unwrap();
    static ref LEADING_CHOICE_MARKER_REGEX: Regex = Regex::new(r"^[A-Z]\)\s*").unwrap();
    static ref LINE_BREAKS_REGEX: Regex = Regex::new(r"\n+").unwrap();
}

pub(crate) const RICH_CHOICES_COLUMN: usize = 3;
pub(crate) const RICH_MIN_FIELDS: usize = 4;
const SIMPLE_MIN_FIELDS: usize = 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedAnswer {
    pub user_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    answer: Option<RecordedAnswer>,
}

impl QuestionRecord {
    pub fn new(question: String, correct_answer: String, options: Vec<String>) -> Self {
        QuestionRecord {
            question,
            correct_answer,
            options,
            answer: None,
        }
    }

    pub fn is_choice_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    pub fn user_answer(&self) -> Option<&str> {
        self.answer.as_ref().map(|a| a.user_answer.as_str())
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.answer.as_ref().map(|a| a.is_correct)
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Stores the user's choice and returns whether it was correct.
    pub(crate) fn record_answer(&mut self, choice: &str) -> bool {
        let is_correct = self.is_choice_correct(choice);
        self.answer = Some(RecordedAnswer {
            user_answer: choice.to_owned(),
            is_correct,
        });
        is_correct
    }

    pub(crate) fn clear_answer(&mut self) {
        self.answer = None;
    }
}

fn trimmed_non_empty<'a, I>(parts: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    parts
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_owned())
        .collect()
}

/// Decomposes a cell holding several answer choices, such as
/// `"A) red B) green C) blue"` or one choice per line.
///
/// A cell that matches neither layout becomes a single choice. A blank cell
/// becomes a single empty choice.
pub fn parse_enriched_choices(blob: &str) -> Vec<String> {
    let lettered = trimmed_non_empty(CHOICE_MARKER_REGEX.split(blob));
    if lettered.len() > 1 {
        return lettered;
    }

    let lines: Vec<String> = LINE_BREAKS_REGEX
        .split(blob)
        .map(|line| LEADING_CHOICE_MARKER_REGEX.replace(line, "").trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() > 1 {
        return lines;
    }

    vec![blob.trim().to_owned()]
}

/// Reads `question, correct answer, <ignored>, enriched choices`.
pub fn extract_rich(fields: &[String]) -> Option<QuestionRecord> {
    if fields.len() < RICH_MIN_FIELDS {
        return None;
    }
    Some(QuestionRecord::new(
        fields[0].clone(),
        fields[1].clone(),
        parse_enriched_choices(&fields[RICH_CHOICES_COLUMN]),
    ))
}

/// Reads `question, correct answer, other answers...`. The correct answer is
/// itself one of the options.
pub fn extract_simple(fields: &[String]) -> Option<QuestionRecord> {
    if fields.len() < SIMPLE_MIN_FIELDS {
        return None;
    }
    Some(QuestionRecord::new(
        fields[0].clone(),
        fields[1].clone(),
        fields[1..].to_vec(),
    ))
}
