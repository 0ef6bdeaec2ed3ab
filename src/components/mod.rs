pub mod icons;
pub mod switch;
pub mod theme_toggle;

pub use icons::{MoonIcon, SunIcon};
pub use switch::Switch;
pub use theme_toggle::{ThemeToggle, ThemeTogglePlaceholder, ThemeToggleView};
