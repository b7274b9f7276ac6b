use crate::utils::parse_count_input;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for one numeric input field.
#[derive(Clone)]
pub struct NumberInput {
    /// The current text content of the input field, exactly as typed.
    pub text: String,
    /// Callback for the input's `oninput` event.
    pub on_input: Callback<InputEvent>,
}

/// Custom hook to manage a whole-number input.
///
/// Every keystroke updates the text, normalizes it and reports the value
/// through `on_change`. An emptied field keeps showing empty text while
/// reporting 0.
#[hook]
pub fn use_number_input(value: u32, on_change: Callback<u32>) -> NumberInput {
    let text_state_handle: UseStateHandle<String> = use_state(|| value.to_string());

    let on_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            let parsed = parse_count_input(&text);
            text_setter.set(text);
            on_change.emit(parsed);
        })
    };

    // Effect to update the text if the value was changed from outside
    {
        let text_setter_for_effect = text_state_handle.clone();
        use_effect_with(value, move |current_value| {
            if parse_count_input(&text_setter_for_effect) != *current_value {
                text_setter_for_effect.set(current_value.to_string());
            }
            || ()
        });
    }

    NumberInput {
        text: (*text_state_handle).clone(),
        on_input,
    }
}
