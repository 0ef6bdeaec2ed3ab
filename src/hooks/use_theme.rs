use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::Config;
use crate::models::theme::Theme;

/// Handle shared through context by `ThemeProvider`
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub resolved_theme: Option<Theme>, // None until a theme is chosen
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub default_theme: Option<Theme>,
    #[prop_or_default]
    pub children: Html,
}

/// Owns the active theme and exposes it to descendants via `use_theme`
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = {
        let default_theme = props.default_theme;
        use_state_eq(move || default_theme)
    };

    // Effect: Apply theme to DOM
    use_effect_with(*theme, move |theme| {
        if let Some(theme) = *theme {
            if let Err(e) = apply_theme_to_dom(theme) {
                gloo::console::warn!(&format!("Failed to apply theme: {e:?}"));
            }
        }
        || ()
    });

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(Some(next)))
    };

    let handle = ThemeHandle {
        resolved_theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

/// Reads the theme from the nearest `ThemeProvider`.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider`.
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
        .expect("use_theme called outside of a ThemeProvider; wrap the app in <ThemeProvider>")
}

/// Apply theme to DOM by setting the theme attribute and dark class on <html>
fn apply_theme_to_dom(theme: Theme) -> Result<(), JsValue> {
    let html = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("document element unavailable"))?;

    html.set_attribute(Config::THEME_ATTRIBUTE, theme.as_str())?;
    html.class_list()
        .toggle_with_force(Config::DARK_CLASS, theme.is_dark())?;

    gloo::console::debug!(&format!("Applied {theme} theme"));
    Ok(())
}

/// Theme declared on <html> by the server-rendered page, if any
pub fn document_theme() -> Option<Theme> {
    let value = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|html| html.get_attribute(Config::THEME_ATTRIBUTE))?;

    match value.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            gloo::console::warn!(&format!("Ignoring page theme: {e}"));
            None
        }
    }
}
