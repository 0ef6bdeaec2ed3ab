pub mod use_mounted;
pub mod use_theme;

pub use use_mounted::use_mounted;
pub use use_theme::{ThemeHandle, ThemeProvider, use_theme};
