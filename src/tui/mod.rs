//! TUI module for playing in the terminal.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Board, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop, game mutation)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
