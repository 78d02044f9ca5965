//! Core pomodoro state: the countdown timer and the task store.

pub mod tasks;
pub mod timer;

pub use tasks::{FIRST_TASK_ID, Snapshot, Task, TaskId, TaskList};
pub use timer::{BREAK_SECS, Mode, Timer, TimerDurations, WORK_SECS, format_clock};
