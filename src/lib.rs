//! `Pomotask` - terminal pomodoro timer with a persistent to-do list.
//!
//! A work/break countdown sits above a task list that is saved to a JSON file
//! after every change.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
