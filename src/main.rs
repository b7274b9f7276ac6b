//! Main module for the Buff Timer application using Yew.
//! Wires the timer reducer, the one-second clock and the UI components.

use buff_timer::{
    audio::WebAudioSink,
    clock::{Clock, IntervalClock, TICK_PERIOD_MS},
    reducer::{TimerAction, TimerModel},
    ConfigField,
};
use log::info;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{DurationField, FieldGroup, Header, TimerControls, TimerDisplay};
use config::*;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Build the `on_change` callback for one config field.
fn field_setter(
    dispatcher: &UseReducerDispatcher<TimerModel<WebAudioSink>>,
    field: ConfigField,
) -> Callback<u32> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |value: u32| dispatcher.dispatch(TimerAction::SetField(field, value)))
}

/// Build a button callback that dispatches a fixed action.
fn action_button(
    dispatcher: &UseReducerDispatcher<TimerModel<WebAudioSink>>,
    action: TimerAction,
) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| dispatcher.dispatch(action))
}

// ──────────────────────────────────────────────────────────────────────────────

/// Timer widget: configuration inputs, controls and the live display.
#[function_component(RepeatTimer)]
fn repeat_timer() -> Html {
    let timer = use_reducer(|| TimerModel::new(WebAudioSink::new()));
    let dispatcher = timer.dispatcher();
    let is_running = timer.engine.is_running();

    // Tick subscription lives exactly as long as the session runs; the
    // destructor also covers unmount.
    {
        let dispatcher = dispatcher.clone();
        use_effect_with(is_running, move |&running| {
            let subscription = running.then(|| {
                info!("Clock subscribed");
                IntervalClock.subscribe(
                    TICK_PERIOD_MS,
                    Box::new(move || dispatcher.dispatch(TimerAction::Tick)),
                )
            });
            move || {
                if subscription.is_some() {
                    info!("Clock cancelled");
                }
                drop(subscription);
            }
        });
    }

    let on_start = {
        let dispatcher = dispatcher.clone();
        let sink = timer.engine.sink().clone();
        Callback::from(move |_: MouseEvent| {
            // Browsers only let audio start inside a user gesture.
            sink.resume();
            dispatcher.dispatch(TimerAction::Start);
        })
    };
    let on_stop = action_button(&dispatcher, TimerAction::Stop);
    let on_reset = action_button(&dispatcher, TimerAction::Reset);

    let cfg = *timer.engine.config();

    html! {
        <div class="timer-container">
            <h1 class="timer-title">{ APP_TITLE }</h1>

            <FieldGroup label="Buff lasts">
                <DurationField id="start_min" unit="min"
                    value={cfg.start_min}
                    on_change={field_setter(&dispatcher, ConfigField::StartMin)} />
                <DurationField id="start_sec" unit="sec"
                    value={cfg.start_sec}
                    max={MAX_SECONDS_FIELD}
                    on_change={field_setter(&dispatcher, ConfigField::StartSec)} />
            </FieldGroup>

            <FieldGroup label="Hunting session">
                <DurationField id="repeat_hour" unit="h"
                    value={cfg.repeat_hour}
                    on_change={field_setter(&dispatcher, ConfigField::RepeatHour)} />
                <DurationField id="repeat_min" unit="min"
                    value={cfg.repeat_min}
                    max={MAX_MINUTES_OF_HOUR_FIELD}
                    on_change={field_setter(&dispatcher, ConfigField::RepeatMin)} />
            </FieldGroup>

            <FieldGroup label="Buff swap pause">
                <DurationField id="pause_sec" unit="sec"
                    value={cfg.pause_sec}
                    on_change={field_setter(&dispatcher, ConfigField::PauseSec)} />
            </FieldGroup>

            <TimerControls
                is_running={is_running}
                on_start={on_start}
                on_stop={on_stop}
                on_reset={on_reset} />

            <TimerDisplay snapshot={timer.snapshot()} />
        </div>
    }
}

/// App wrapper: header over the timer widget.
#[function_component]
pub fn App() -> Html {
    html! {
        <>
            <Header />
            <main class="app-main">
                <RepeatTimer />
            </main>
        </>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
