use theme_toggle::config::Config;
use theme_toggle::hooks::use_theme::document_theme;
use theme_toggle::{App, AppProps};

fn main() {
    // Start from the theme the pre-rendered page was built with
    let props = AppProps {
        default_theme: Some(document_theme().unwrap_or(Config::DEFAULT_THEME)),
    };

    let renderer = yew::Renderer::<App>::with_props(props);
    if Config::HYDRATE {
        renderer.hydrate();
    } else {
        renderer.render();
    }
}
