use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod audio;
pub mod clock;
pub mod reducer;

/// Default timer parameters
pub mod defaults {
    pub const START_MIN: u32 = 0;
    pub const START_SEC: u32 = 10;
    pub const REPEAT_HOUR: u32 = 0;
    pub const REPEAT_MIN: u32 = 1;
    pub const PAUSE_SEC: u32 = 5;

    pub const TONE_DURATION_SECS: f64 = 1.0;
    pub const TONE_FREQUENCY_HZ: f32 = 440.0;
    pub const TONE_VOLUME: f32 = 0.5;
}

/// User-editable timer settings. Derived totals are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerConfig {
    pub start_min: u32,
    pub start_sec: u32,
    pub repeat_hour: u32,
    pub repeat_min: u32,
    pub pause_sec: u32,
}

/// Identifies a single field of [`TimerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    StartMin,
    StartSec,
    RepeatHour,
    RepeatMin,
    PauseSec,
}

impl TimerConfig {
    pub fn new(start_min: u32, start_sec: u32, repeat_hour: u32, repeat_min: u32, pause_sec: u32) -> Self {
        Self {
            start_min,
            start_sec,
            repeat_hour,
            repeat_min,
            pause_sec,
        }
    }

    /// Length of one countdown cycle in seconds.
    pub fn start_timer_seconds(&self) -> u32 {
        self.start_min.saturating_mul(60).saturating_add(self.start_sec)
    }

    /// Length of the whole session in seconds.
    pub fn repeat_total_seconds(&self) -> u32 {
        self.repeat_hour
            .saturating_mul(3600)
            .saturating_add(self.repeat_min.saturating_mul(60))
    }

    pub fn get(&self, field: ConfigField) -> u32 {
        match field {
            ConfigField::StartMin => self.start_min,
            ConfigField::StartSec => self.start_sec,
            ConfigField::RepeatHour => self.repeat_hour,
            ConfigField::RepeatMin => self.repeat_min,
            ConfigField::PauseSec => self.pause_sec,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: u32) {
        match field {
            ConfigField::StartMin => self.start_min = value,
            ConfigField::StartSec => self.start_sec = value,
            ConfigField::RepeatHour => self.repeat_hour = value,
            ConfigField::RepeatMin => self.repeat_min = value,
            ConfigField::PauseSec => self.pause_sec = value,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(
            defaults::START_MIN,
            defaults::START_SEC,
            defaults::REPEAT_HOUR,
            defaults::REPEAT_MIN,
            defaults::PAUSE_SEC,
        )
    }
}

/// Parameters of one audible alert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneSpec {
    pub duration_secs: f64,
    pub frequency_hz: f32,
    /// Peak gain, expected in `0.0..=1.0`.
    pub volume: f32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            duration_secs: defaults::TONE_DURATION_SECS,
            frequency_hz: defaults::TONE_FREQUENCY_HZ,
            volume: defaults::TONE_VOLUME,
        }
    }
}

// Reasons an alert could not be played
#[derive(Debug, Clone, PartialEq)]
pub enum AlertError {
    /// No audio output exists in this environment.
    Unavailable,
    /// The audio backend rejected one of the playback calls.
    Playback(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::Unavailable => write!(f, "Audio output is not available"),
            AlertError::Playback(reason) => write!(f, "Failed to play alert tone: {}", reason),
        }
    }
}

impl std::error::Error for AlertError {}

/// Receives a notification every time a countdown cycle completes.
///
/// Delivery is best-effort: the engine logs an `Err` and carries on.
pub trait AlertSink {
    fn emit(&self, tone: &ToneSpec) -> Result<(), AlertError>;
}

impl<S: AlertSink + ?Sized> AlertSink for Rc<S> {
    fn emit(&self, tone: &ToneSpec) -> Result<(), AlertError> {
        (**self).emit(tone)
    }
}

/// Which branch of the tick transition ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running; nothing changed.
    Idle,
    /// The session length had been reached; the engine halted.
    SessionComplete,
    /// One second of the pause window was consumed.
    PauseTick { pause_left: u32 },
    /// One second of the countdown was consumed without finishing the cycle.
    Countdown { time_left: u32 },
    /// The countdown reached zero, the alert fired and the next cycle began.
    CycleComplete { paused: bool },
}

/// Read-only view of the engine, shaped for rendering and for the JS boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub time_left: u32,
    pub total_elapsed: u32,
    pub is_running: bool,
    pub is_paused: bool,
    pub pause_left: u32,
    pub display_minutes: u32,
    pub display_seconds: u32,
    pub remaining_session_seconds: u32,
}

/// Repeating countdown with a pause window after every cycle, bounded by a
/// total session length.
///
/// All mutation goes through [`configure`](Self::configure), [`start`](Self::start),
/// [`stop`](Self::stop), [`reset`](Self::reset) and [`tick`](Self::tick); the host
/// is responsible for calling `tick` once per second while [`is_running`](Self::is_running).
#[derive(Debug, Clone)]
pub struct TimerEngine<A> {
    config: TimerConfig,
    tone: ToneSpec,
    time_left: u32,
    total_elapsed: u32,
    is_running: bool,
    is_paused: bool,
    pause_left: u32,
    sink: A,
}

impl<A: AlertSink> TimerEngine<A> {
    /// Create an idle engine with the default configuration.
    pub fn new(sink: A) -> Self {
        Self::with_config(TimerConfig::default(), sink)
    }

    pub fn with_config(config: TimerConfig, sink: A) -> Self {
        Self {
            config,
            tone: ToneSpec::default(),
            time_left: 0,
            total_elapsed: 0,
            is_running: false,
            is_paused: false,
            pause_left: 0,
            sink,
        }
    }

    /// Replace the configuration. Counters are untouched; the new values take
    /// effect at the next cycle boundary or session check.
    pub fn configure(&mut self, config: TimerConfig) {
        self.config = config;
    }

    pub fn set_field(&mut self, field: ConfigField, value: u32) {
        self.config.set(field, value);
    }

    pub fn set_tone(&mut self, tone: ToneSpec) {
        self.tone = tone;
    }

    /// Begin a new session from zero. Ignored when either duration is zero.
    pub fn start(&mut self) {
        let cycle = self.config.start_timer_seconds();
        let session = self.config.repeat_total_seconds();
        if cycle == 0 || session == 0 {
            warn!(
                "Start ignored: cycle length {}s, session length {}s",
                cycle, session
            );
            return;
        }

        self.time_left = cycle;
        self.total_elapsed = 0;
        self.is_paused = false;
        self.is_running = true;
        info!("Session started: {}s cycles for {}s", cycle, session);
    }

    /// Halt ticking. Counters are kept, but `start` always begins from zero.
    pub fn stop(&mut self) {
        if self.is_running {
            info!("Session stopped at {}s elapsed", self.total_elapsed);
        }
        self.is_running = false;
    }

    /// Halt and clear all counters. Configuration is kept.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.time_left = 0;
        self.total_elapsed = 0;
        self.is_paused = false;
        self.pause_left = 0;
        info!("Timer reset");
    }

    /// Advance the state machine by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }

        // Session end is judged on the elapsed time before this tick.
        if self.total_elapsed >= self.config.repeat_total_seconds() {
            self.is_running = false;
            self.time_left = 0;
            self.is_paused = false;
            info!("Session complete after {}s", self.total_elapsed);
            return TickOutcome::SessionComplete;
        }

        if self.is_paused {
            self.pause_left = self.pause_left.saturating_sub(1);
            if self.pause_left == 0 {
                self.is_paused = false;
                debug!("Pause window over");
            }
            self.total_elapsed += 1;
            return TickOutcome::PauseTick {
                pause_left: self.pause_left,
            };
        }

        let outcome = if self.time_left <= 1 {
            self.alert();

            let pause_sec = self.config.pause_sec;
            if pause_sec > 0 {
                self.is_paused = true;
                self.pause_left = pause_sec;
            }
            self.time_left = self.config.start_timer_seconds();
            debug!(
                "Cycle complete at {}s, pause {}s",
                self.total_elapsed + 1,
                pause_sec
            );
            TickOutcome::CycleComplete {
                paused: self.is_paused,
            }
        } else {
            self.time_left -= 1;
            TickOutcome::Countdown {
                time_left: self.time_left,
            }
        };

        self.total_elapsed += 1;
        outcome
    }

    fn alert(&self) {
        if let Err(e) = self.sink.emit(&self.tone) {
            warn!("Alert skipped: {}", e);
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn tone(&self) -> &ToneSpec {
        &self.tone
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn total_elapsed(&self) -> u32 {
        self.total_elapsed
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn pause_left(&self) -> u32 {
        self.pause_left
    }

    pub fn display_minutes(&self) -> u32 {
        self.time_left / 60
    }

    pub fn display_seconds(&self) -> u32 {
        self.time_left % 60
    }

    pub fn remaining_session_seconds(&self) -> u32 {
        self.config
            .repeat_total_seconds()
            .saturating_sub(self.total_elapsed)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            time_left: self.time_left,
            total_elapsed: self.total_elapsed,
            is_running: self.is_running,
            is_paused: self.is_paused,
            pause_left: self.pause_left,
            display_minutes: self.display_minutes(),
            display_seconds: self.display_seconds(),
            remaining_session_seconds: self.remaining_session_seconds(),
        }
    }

    /// Start a session and run it for `ticks` ticks, collecting a snapshot
    /// after each one.
    pub fn simulate(&mut self, ticks: u32) -> Vec<TimerSnapshot> {
        self.start();
        (0..ticks)
            .map(|_| {
                self.tick();
                self.snapshot()
            })
            .collect()
    }
}

/// Sink that only counts alerts. Used for headless runs.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: std::cell::Cell<u32>,
}

impl CountingSink {
    pub fn count(&self) -> u32 {
        self.count.get()
    }
}

impl AlertSink for CountingSink {
    fn emit(&self, _tone: &ToneSpec) -> Result<(), AlertError> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

/// Result of a headless session run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub snapshots: Vec<TimerSnapshot>,
    pub alerts: u32,
}

/// Run a session without audio or timers, for previews and scripted checks.
pub fn run_simulation(config: TimerConfig, ticks: u32) -> SimulationReport {
    let mut engine = TimerEngine::with_config(config, CountingSink::default());
    let snapshots = engine.simulate(ticks);
    SimulationReport {
        snapshots,
        alerts: engine.sink().count(),
    }
}

/// JS entry point for [`run_simulation`].
///
/// # Arguments
/// * `config_js` - A `TimerConfig`-shaped object; missing fields take their defaults
/// * `ticks` - Number of one-second ticks to run after starting
///
/// # Returns
/// `{ snapshots, alerts }`, or an error string if the config could not be read
#[wasm_bindgen]
pub fn simulate_session(config_js: JsValue, ticks: u32) -> JsValue {
    let config: TimerConfig = match serde_wasm_bindgen::from_value(config_js) {
        Ok(c) => c,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize config: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    serde_wasm_bindgen::to_value(&run_simulation(config, ticks)).unwrap_or(JsValue::NULL)
}
