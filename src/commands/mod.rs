use anyhow::*;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::game::quiz::definition::PoolShape;
use crate::game::quiz::session::QuizSession;
use crate::game::Game;
use crate::output::QuizOutput;


pub const HELP: &str = "Commands:
  load <path>   load a quiz file
  <number>      pick a session size, or select an option during a quiz
  all           use every question
  s             submit the selected option
  n / p         next / previous question
  r             restart with the same questions
  v             review answers from the start
  new           new quiz from the same file
  upload        forget the current file
  q             quit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Load(PathBuf),
    Choose(String),
    Submit,
    Next,
    Previous,
    Restart,
    Review,
    NewQuiz,
    Upload,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(split) => (&line[..split], line[split..].trim()),
            None => (line, ""),
        };
        let command = match keyword.to_lowercase().as_str() {
            "load" => {
                if rest.is_empty() {
                    return Err(anyhow!("Filename cannot be blank"));
                }
                Command::Load(PathBuf::from(rest))
            }
            "s" | "submit" => Command::Submit,
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "r" | "restart" => Command::Restart,
            "v" | "review" => Command::Review,
            "new" => Command::NewQuiz,
            "upload" => Command::Upload,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Choose(line.to_owned()),
        };
        Ok(command)
    }
}

fn pick_option(session: &QuizSession, input: &str) -> Result<String> {
    let number: usize = input
        .trim()
        .parse()
        .with_context(|| format!("{:?} is not an option number", input))?;
    let options = &session.current().options;
    number
        .checked_sub(1)
        .and_then(|index| options.get(index))
        .cloned()
        .with_context(|| format!("Pick an option between 1 and {}", options.len()))
}

/// Runs one line of user input against the game.
pub fn execute<O: QuizOutput>(
    game: &mut Game<O>,
    line: &str,
    shape: Option<PoolShape>,
) -> Result<Flow> {
    let command: Command = line.parse()?;
    run(game, command, shape)
}

pub fn run<O: QuizOutput>(
    game: &mut Game<O>,
    command: Command,
    shape: Option<PoolShape>,
) -> Result<Flow> {
    match command {
        Command::Load(path) => {
            let raw_text = fs::read_to_string(&path)
                .with_context(|| format!("Could not read quiz file {:?}", path))?;
            match shape {
                Some(shape) => game.load_file_with_shape(&raw_text, shape)?,
                None => game.load_file(&raw_text)?,
            }
        }
        Command::Choose(input) => {
            let option = match game.get_session() {
                Some(session) => Some(pick_option(session, &input)?),
                None => None,
            };
            match option {
                Some(option) => game.select_option(&option)?,
                None => game.start_custom_session(&input)?,
            }
        }
        Command::Submit => game.submit_selected()?,
        Command::Next => game.go_next()?,
        Command::Previous => game.go_previous()?,
        Command::Restart => game.restart()?,
        Command::Review => game.review_from_start()?,
        Command::NewQuiz => game.start_new_from_same_pool()?,
        Command::Upload => game.reset_to_upload(),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
