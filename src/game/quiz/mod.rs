use std::str::FromStr;

use crate::game::error::QuizError;

pub mod definition;
pub mod results;
pub mod session;
pub mod shuffle;

/// How many questions a new session should draw from the pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionCount {
    All,
    Exactly(usize),
}

impl FromStr for QuestionCount {
    type Err = QuizError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Ok(QuestionCount::All);
        }
        match leading_count(input) {
            Some(count) if count >= 1 => Ok(QuestionCount::Exactly(count)),
            _ => Err(QuizError::InvalidCustomCount(input.to_owned())),
        }
    }
}

/// Reads the run of digits at the start of `input`, after an optional `+`.
/// Anything after the digits is ignored, so `"12abc"` reads as 12. Counts too
/// large for `usize` saturate since they get clamped to the pool size anyway.
fn leading_count(input: &str) -> Option<usize> {
    let unsigned = input.strip_prefix('+').unwrap_or(input);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}
