use crate::models::theme::Theme;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Theme used when the page does not declare one
    pub const DEFAULT_THEME: Theme = Theme::Light;

    /// Hydrate server-rendered markup instead of rendering from scratch
    pub const HYDRATE: bool = true;

    /// Attribute set on `<html>` with the active theme identifier
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Class toggled on `<html>` while the dark theme is active
    pub const DARK_CLASS: &'static str = "dark";
}
