use thiserror::Error;

/// Conditions reported back to the caller of a quiz intent.
///
/// An intent that returns one of these has left the game untouched.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    /// The uploaded file did not yield a single usable question.
    #[error("No valid questions found in the file. Please check the format.")]
    NoValidQuestions,

    #[error("Please enter a valid number (got {0:?})")]
    InvalidCustomCount(String),

    #[error("Select an option before submitting")]
    NoSelectionOnSubmit,

    #[error("This question has already been answered")]
    AlreadyAnswered,

    #[error("Answer this question before moving on")]
    NotAnswered,

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("Already at the last question")]
    AtLastQuestion,

    #[error("The quiz is not complete yet")]
    NotComplete,

    #[error("No questions available. Please upload a file first.")]
    NoPoolLoaded,

    #[error("There is no quiz in progress")]
    NoActiveSession,
}
