//! hangman: reveal a fixed phrase letter by letter before the drawing
//! is finished.

pub mod gallows;
pub mod game;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
