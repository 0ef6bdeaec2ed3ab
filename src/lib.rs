use yew::prelude::*;

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;

use components::ThemeToggle;
use hooks::ThemeProvider;
use models::Theme;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub default_theme: Option<Theme>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ThemeProvider default_theme={props.default_theme}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Theme Toggle"}</h1>
                    <ThemeToggle />
                </header>

                <main class="app-main">
                    <p>{"Use the switch in the header to change between the light and dark themes."}</p>
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ThemeProvider>
    }
}
