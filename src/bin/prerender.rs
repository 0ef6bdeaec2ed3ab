//! Renders the app to a hydratable HTML document on stdout.
//!
//! Usage: `prerender [light|dark]`

use std::io::Write;

use theme_toggle::config::Config;
use theme_toggle::models::Theme;
use theme_toggle::{App, AppProps};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let theme = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Theme>()?,
        None => Config::DEFAULT_THEME,
    };
    tracing::info!(%theme, "pre-rendering app");

    let body = yew::ServerRenderer::<App>::with_props(move || AppProps {
        default_theme: Some(theme),
    })
    .render()
    .await;

    let document = render_document(theme, &body);
    std::io::stdout().lock().write_all(document.as_bytes())?;
    tracing::debug!(bytes = document.len(), "document written");

    Ok(())
}

/// Wraps rendered app markup in a page that declares the theme on `<html>`
fn render_document(theme: Theme, body: &str) -> String {
    let class = if theme.is_dark() { Config::DARK_CLASS } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" {attr}="{theme}" class="{class}">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Theme Toggle</title>
    <link data-trunk rel="rust" data-bin="theme-toggle" />
</head>
<body>{body}</body>
</html>
"#,
        attr = Config::THEME_ATTRIBUTE,
    )
}
