use itertools::Itertools;
use std::io::Write;

use crate::game::quiz::definition::QuestionRecord;
use crate::output::{Message, QuizOutput};

/// Renders messages as plain text on standard output.
#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }

    fn interpret_question(question: &QuestionRecord, index: usize, total: usize) -> String {
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = match question.user_answer() {
                    Some(answer) if answer == option && question.is_correct() == Some(true) => "✅",
                    Some(answer) if answer == option => "❌",
                    Some(_) if *option == question.correct_answer => "✅",
                    _ => "  ",
                };
                format!("{} {}. {}", marker, i + 1, option)
            })
            .join("\n");
        let progress = (index + 1) * 100 / total.max(1);
        format!(
            "\n[{}/{}] {}% ─ {}\n{}",
            index + 1,
            total,
            progress,
            question.question,
            options
        )
    }

    pub fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Answered { is_correct: true, .. } => "✅ Correct! Great job!".into(),
            Answered { is_correct: false, correct_answer } => {
                format!("❌ Incorrect. The correct answer is: {}", correct_answer)
            }
            AwaitingUpload => "📁 Load a quiz file to begin (`load <path>`).".into(),
            CountClamped { requested, available } => format!(
                "Only {} questions available ({} requested). Starting quiz with all questions.",
                available, requested
            ),
            InvalidCustomCount(input) => format!("Please enter a valid number (got {:?}).", input),
            NoQuestionsAvailable => "No questions available. Please load a file first.".into(),
            NoValidQuestions => {
                "No valid questions found in the file. Please check the format.".into()
            }
            OptionSelected(option) => format!("Selected: {} (`s` to submit)", option),
            PoolReady { size, presets, .. } => {
                let choices = presets
                    .iter()
                    .filter(|count| **count < *size)
                    .map(|count| count.to_string())
                    .chain(std::iter::once(format!("all ({})", size)))
                    .join(", ");
                format!(
                    "Quiz loaded! {} questions available.\nHow many questions would you like? {}",
                    size, choices
                )
            }
            QuestionChanged { question, index, total } => {
                ConsoleOutput::interpret_question(question, *index, *total)
            }
            ScoreUpdate { score, answered } => format!("📈 Score: {} / {}", score, answered),
            SessionComplete(summary) => format!(
                "\n🎊 Quiz complete! {}/{} ({}%)\n✅ Correct: {}\n❌ Incorrect: {}\n`r` to restart, `v` to review, `new` for another quiz.",
                summary.correct,
                summary.total,
                summary.percentage,
                summary.correct,
                summary.incorrect
            ),
        }
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let content = self.interpret_message(message);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content).ok();
    }
}
