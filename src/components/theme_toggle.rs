use yew::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::components::switch::{Switch, data_state};
use crate::hooks::use_mounted::use_mounted;
use crate::hooks::use_theme::use_theme;
use crate::models::theme::{Theme, is_checked, theme_for_checked};

pub const LOADING_LABEL: &str = "Toggle theme (loading)";
pub const READY_LABEL: &str = "Toggle theme between light and dark";

/// Adapts a theme setter to the switch's checked-change callback
pub fn checked_change_handler(set_theme: Callback<Theme>) -> Callback<bool> {
    set_theme.reform(theme_for_checked)
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Theme toggle bound to the nearest `ThemeProvider`
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let mounted = use_mounted();
    let theme_handle = use_theme();

    html! {
        <ThemeToggleView
            {mounted}
            resolved_theme={theme_handle.resolved_theme}
            on_theme_change={theme_handle.set_theme}
            class={props.class.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleViewProps {
    pub mounted: bool,
    #[prop_or_default]
    pub resolved_theme: Option<Theme>,
    #[prop_or_default]
    pub on_theme_change: Callback<Theme>,
    #[prop_or_default]
    pub class: Classes,
}

/// Stateless rendering of the toggle for a given mount state and theme
#[function_component(ThemeToggleView)]
pub fn theme_toggle_view(props: &ThemeToggleViewProps) -> Html {
    if !props.mounted {
        return html! { <ThemeTogglePlaceholder class={props.class.clone()} /> };
    }

    let checked = is_checked(props.mounted, props.resolved_theme);

    html! {
        <Switch
            {checked}
            on_checked_change={checked_change_handler(props.on_theme_change.clone())}
            class={classes!("theme-toggle", props.class.clone())}
            aria_label={AttrValue::Static(READY_LABEL)}
        >
            if checked {
                <MoonIcon />
            } else {
                <SunIcon />
            }
        </Switch>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeTogglePlaceholderProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Disabled stand-in rendered until the toggle has mounted.
///
/// Shares the switch's sizing classes but not the switch itself, so the
/// pre-rendered markup has no interactive behaviour to hydrate.
#[function_component(ThemeTogglePlaceholder)]
pub fn theme_toggle_placeholder(props: &ThemeTogglePlaceholderProps) -> Html {
    let state = data_state(false);

    html! {
        <button
            type="button"
            class={classes!("switch", "theme-toggle", "theme-toggle-loading", props.class.clone())}
            data-state={state}
            disabled=true
            aria-label={LOADING_LABEL}
        >
            <span class="switch-thumb" data-state={state} />
        </button>
    }
}
