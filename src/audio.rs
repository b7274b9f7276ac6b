//! Web Audio alert output.
//! Plays a soft sine bell through one shared `AudioContext`.

use crate::{AlertError, AlertSink, ToneSpec};
use js_sys::Promise;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, OscillatorType};

/// Seconds for the gain to ramp from silence to full volume.
const ATTACK_SECS: f64 = 0.2;

fn playback_error(e: JsValue) -> AlertError {
    AlertError::Playback(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Alert sink that owns the page's audio context.
///
/// If the browser refuses to create a context the sink stays usable and
/// every `emit` reports [`AlertError::Unavailable`].
#[derive(Clone, Debug)]
pub struct WebAudioSink {
    ctx: Option<AudioContext>,
}

impl WebAudioSink {
    pub fn new() -> Self {
        let ctx = match AudioContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                warn!("Audio context unavailable: {:?}", e);
                None
            }
        };
        Self { ctx }
    }

    /// Resume a context the browser created suspended. Must be called from a
    /// user gesture to have any effect.
    pub fn resume(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        let promise: Promise = match ctx.resume() {
            Ok(p) => p,
            Err(e) => {
                warn!("Audio context resume rejected: {:?}", e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("Audio context did not resume: {:?}", e);
            }
        });
    }

    fn play(ctx: &AudioContext, tone: &ToneSpec) -> Result<(), JsValue> {
        let now = ctx.current_time();
        let end = now + tone.duration_secs.max(0.0);
        let volume = tone.volume.clamp(0.0, 1.0);

        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(tone.frequency_hz);

        let envelope = gain.gain();
        envelope.set_value_at_time(0.0, now)?;
        envelope.linear_ramp_to_value_at_time(volume, now + ATTACK_SECS)?;
        envelope.linear_ramp_to_value_at_time(0.0, end)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.start()?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}

impl Default for WebAudioSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for WebAudioSink {
    fn emit(&self, tone: &ToneSpec) -> Result<(), AlertError> {
        let ctx = self.ctx.as_ref().ok_or(AlertError::Unavailable)?;
        Self::play(ctx, tone).map_err(playback_error)?;
        debug!(
            "Alert tone: {}Hz for {}s at {}",
            tone.frequency_hz, tone.duration_secs, tone.volume
        );
        Ok(())
    }
}
