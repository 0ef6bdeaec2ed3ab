use yew::prelude::*;

/// `data-state` value for a two-state control
pub const fn data_state(checked: bool) -> &'static str {
    if checked { "checked" } else { "unchecked" }
}

/// Emits the flipped checked value, unless the control is disabled
pub fn emit_toggle(checked: bool, disabled: bool, on_checked_change: &Callback<bool>) {
    if !disabled {
        on_checked_change.emit(!checked);
    }
}

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    pub checked: bool,

    /// Receives the new checked value on activation
    #[prop_or_default]
    pub on_checked_change: Callback<bool>,

    #[prop_or(false)]
    pub disabled: bool,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub aria_label: Option<AttrValue>,

    /// Rendered inside the thumb
    #[prop_or_default]
    pub children: Html,
}

/// Accessible two-state switch.
///
/// Renders a native `<button role="switch">`, so keyboard activation
/// (Enter/Space) and focus handling come from the browser. Both the root and
/// the thumb carry `data-state` for styling.
#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    let checked = props.checked;
    let state = data_state(checked);

    let onclick = {
        let on_checked_change = props.on_checked_change.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| emit_toggle(checked, disabled, &on_checked_change))
    };

    html! {
        <button
            type="button"
            role="switch"
            class={classes!("switch", props.class.clone())}
            aria-checked={checked.to_string()}
            aria-label={props.aria_label.clone()}
            data-state={state}
            disabled={props.disabled}
            {onclick}
        >
            <span class="switch-thumb" data-state={state}>
                {props.children.clone()}
            </span>
        </button>
    }
}
