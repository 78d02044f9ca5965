//! Tests for the app module.
//!
//! Organized by what drives the state:
//! - `helpers` - Shared test utilities
//! - `timer` - Tick handling, pause, reset and mode switching
//! - `capture` - The add-task editor: typing, paste, confirm and cancel
//! - `tasks` - Toggle, delete and cursor keys on the task list
//! - `persistence` - Load and save completions
//! - `ui` - Text view and terminal rendering

#[allow(clippy::unwrap_used, clippy::expect_used)]
mod capture;
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
