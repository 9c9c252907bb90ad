pub mod commands;
pub mod game;
pub mod output;
