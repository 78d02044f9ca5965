//! TUI presentation layer.

pub mod setup;
pub mod theme;

pub use setup::TerminalEventGuard;
pub use theme::Theme;
