//! Shared form pieces.

use crate::i18n::TranslationBundle;
use crate::logic::FormError;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    pub(crate) label: String,
    pub(crate) kind: &'static str,
    pub(crate) autocomplete: &'static str,
    pub(crate) value: String,
    pub(crate) on_input: Callback<String>,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    html! {
        <label class="field">
            <span>{&props.label}</span>
            <input
                type={props.kind}
                autocomplete={props.autocomplete}
                value={props.value.clone()}
                {oninput}
            />
        </label>
    }
}

/// Input state setter for a field.
pub(crate) fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

/// Inline validation message, empty when the form is clean.
pub(crate) fn error_notice(bundle: &TranslationBundle, error: Option<FormError>) -> Html {
    error.map_or_else(
        || html! {},
        |err| {
            html! {
                <p class="notice error" role="alert">{bundle.text(err.message_key(), &err.to_string())}</p>
            }
        },
    )
}
