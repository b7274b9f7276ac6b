//! Yew view components for the timer page.
//!
//! Apart from [`DurationField`], which keeps the raw text of its input,
//! these are stateless and render purely from props.

use crate::config::{APP_TITLE, MIN_FIELD_VALUE, PAUSE_BANNER};
use crate::hooks::use_number_input;
use crate::utils::{format_countdown, format_session_remaining};
use buff_timer::TimerSnapshot;
use yew::prelude::*;

/// Page header bar.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header">
            <nav class="app-nav">
                <span class="app-title">{ APP_TITLE }</span>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct DurationFieldProps {
    pub id: AttrValue,
    pub unit: AttrValue,
    pub value: u32,
    #[prop_or_default]
    pub max: Option<u32>,
    pub on_change: Callback<u32>,
}

/// A single number input followed by its unit label.
#[function_component(DurationField)]
pub fn duration_field(props: &DurationFieldProps) -> Html {
    let input = use_number_input(props.value, props.on_change.clone());

    html! {
        <>
            <input
                type="number"
                id={props.id.clone()}
                class="duration-input"
                min={MIN_FIELD_VALUE.to_string()}
                max={props.max.map(|m| m.to_string())}
                placeholder={props.unit.clone()}
                value={input.text.clone()}
                oninput={input.on_input.clone()}
            />
            <label for={props.id.clone()} class="duration-unit">{ props.unit.clone() }</label>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldGroupProps {
    pub label: AttrValue,
    pub children: Html,
}

/// One labelled row of duration fields.
#[function_component(FieldGroup)]
pub fn field_group(props: &FieldGroupProps) -> Html {
    html! {
        <div class="form-group">
            <span class="form-label">{ props.label.clone() }</span>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerControlsProps {
    pub is_running: bool,
    pub on_start: Callback<MouseEvent>,
    pub on_stop: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Start / Stop / Reset buttons. Start is disabled while running, Stop while idle.
#[function_component(TimerControls)]
pub fn timer_controls(props: &TimerControlsProps) -> Html {
    html! {
        <div class="timer-controls">
            <button class="btn-start" disabled={props.is_running} onclick={props.on_start.clone()}>
                { "Start" }
            </button>
            <button class="btn-stop" disabled={!props.is_running} onclick={props.on_stop.clone()}>
                { "Stop" }
            </button>
            <button class="btn-reset" onclick={props.on_reset.clone()}>
                { "Reset" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub snapshot: TimerSnapshot,
}

/// Countdown, session remaining and the pause banner.
#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    let s = &props.snapshot;

    html! {
        <div class="timer-display">
            <h2 class="countdown">
                { format_countdown(s.display_minutes, s.display_seconds) }
            </h2>
            <p class="session-remaining">
                { format!("Session remaining: {}", format_session_remaining(s.remaining_session_seconds)) }
            </p>
            if s.is_paused {
                <p class="pause-banner">{ PAUSE_BANNER }</p>
            }
        </div>
    }
}
