use anyhow::*;
use clap::{Parser, ValueEnum};
use log::info;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use csv_quiz::commands::{self, Command, Flow};
use csv_quiz::game::quiz::definition::PoolShape;
use csv_quiz::game::settings::Settings;
use csv_quiz::game::Game;
use csv_quiz::output::console::ConsoleOutput;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Auto,
    Rich,
    Simple,
}

impl ShapeArg {
    fn to_pool_shape(self) -> Option<PoolShape> {
        match self {
            ShapeArg::Auto => None,
            ShapeArg::Rich => Some(PoolShape::Rich),
            ShapeArg::Simple => Some(PoolShape::Simple),
        }
    }
}

#[derive(Parser)]
#[command(name = "csv-quiz", version, about = "Multiple-choice quizzes from CSV files")]
struct Cli {
    /// Quiz file to load on startup
    file: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Row layout of quiz files
    #[arg(long, value_enum, default_value = "auto")]
    shape: ShapeArg,

    /// Seed for question and option order
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::open(path)?,
        None => Settings::default(),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let shape = cli.shape.to_pool_shape();
    let game = Arc::new(Mutex::new(Game::with_rng(
        ConsoleOutput::new(),
        settings,
        rng,
    )));

    {
        let game = Arc::clone(&game);
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                thread::sleep(TICK_INTERVAL);
                let now = Instant::now();
                game.lock().tick(now.duration_since(last_tick));
                last_tick = now;
            }
        });
    }

    match cli.file {
        Some(path) => {
            let mut game = game.lock();
            if let Err(e) = commands::run(&mut *game, Command::Load(path), shape) {
                eprintln!("{:#}", e);
            }
        }
        None => game.lock().reset_to_upload(),
    }
    println!("Type `help` for the list of commands.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("could not read from standard input")?;
        if line.trim().is_empty() {
            continue;
        }
        let mut game = game.lock();
        let flow = commands::execute(&mut *game, &line, shape).unwrap_or_else(|e| {
            eprintln!("{:#}", e);
            Flow::Continue
        });
        if flow == Flow::Quit {
            break;
        }
    }

    info!("Bye");
    Ok(())
}
