//! Work/break countdown state machine.
//!
//! The timer alternates between [`Mode::Work`] and [`Mode::Break`]. Each
//! [`Timer::tick`] removes one second; when the countdown reaches zero the
//! mode flips and the new mode's full duration is loaded in the same step, so
//! a zero reading is never observable from outside.

/// Default work period in seconds (25 minutes).
pub const WORK_SECS: u32 = 25 * 60;

/// Default break period in seconds (5 minutes).
pub const BREAK_SECS: u32 = 5 * 60;

/// Phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Focused work period.
    #[default]
    Work,
    /// Rest period between work periods.
    Break,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Returns the lowercase label shown in the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
        }
    }
}

/// Configured length of each mode, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDurations {
    /// Length of a work period.
    pub work_secs: u32,
    /// Length of a break period.
    pub break_secs: u32,
}

impl TimerDurations {
    /// Creates durations, lifting zero values to one second.
    ///
    /// A zero-length mode would flip on every tick without ever counting down.
    #[must_use]
    pub fn new(work_secs: u32, break_secs: u32) -> Self {
        Self {
            work_secs: work_secs.max(1),
            break_secs: break_secs.max(1),
        }
    }

    /// Returns the full duration of `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
        }
    }
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            work_secs: WORK_SECS,
            break_secs: BREAK_SECS,
        }
    }
}

/// Countdown state: current mode, seconds left, and whether it is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    mode: Mode,
    remaining: u32,
    running: bool,
    durations: TimerDurations,
}

impl Timer {
    /// Creates a running timer at the start of a work period.
    #[must_use]
    pub const fn new(durations: TimerDurations) -> Self {
        Self {
            mode: Mode::Work,
            remaining: durations.work_secs,
            running: true,
            durations,
        }
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the seconds left in the current mode.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns whether the countdown is advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the configured durations.
    #[must_use]
    pub const fn durations(&self) -> TimerDurations {
        self.durations
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `true` if the state changed. A paused timer, or one already at
    /// zero, ignores the tick.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.flip_mode();
        }
        true
    }

    /// Toggles between running and paused.
    ///
    /// Allowed at any remaining time, including zero.
    pub fn toggle_pause(&mut self) {
        self.running = !self.running;
    }

    /// Restarts the current mode from its full duration and resumes.
    pub fn reset(&mut self) {
        self.remaining = self.durations.for_mode(self.mode);
        self.running = true;
    }

    /// Jumps to the other mode at its full duration and resumes.
    pub fn switch_mode(&mut self) {
        self.flip_mode();
        self.running = true;
    }

    fn flip_mode(&mut self) {
        self.mode = self.mode.other();
        self.remaining = self.durations.for_mode(self.mode);
    }

    /// Overrides the remaining seconds, clamped to the current mode's duration.
    #[cfg(test)]
    pub(crate) fn set_remaining(&mut self, secs: u32) {
        self.remaining = secs.min(self.durations.for_mode(self.mode));
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimerDurations::default())
    }
}

/// Formats seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
