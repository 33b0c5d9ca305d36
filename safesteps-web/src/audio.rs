//! Procedural audio cues and speech narration.
//!
//! Everything here is fire-and-forget: a missing AudioContext or speech
//! engine logs once and the game carries on silently.
use safesteps_game::OutcomeNotifier;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType, SpeechSynthesisUtterance};

use crate::dom;

/// Tone preset for one outcome cue.
struct Tone {
    frequency: f32,
    shape: OscillatorType,
    start_gain: f32,
    duration: f64,
}

const CORRECT_TONE: Tone = Tone {
    frequency: 523.25, // C5
    shape: OscillatorType::Sine,
    start_gain: 0.3,
    duration: 0.3,
};

const INCORRECT_TONE: Tone = Tone {
    frequency: 200.0,
    shape: OscillatorType::Triangle,
    start_gain: 0.2,
    duration: 0.4,
};

/// Browser-backed [`OutcomeNotifier`] using the Web Audio and Speech APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebNotifier;

impl WebNotifier {
    fn play_tone(tone: &Tone) -> Result<(), JsValue> {
        let ctx = AudioContext::new()?;
        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        oscillator.frequency().set_value(tone.frequency);
        oscillator.set_type(tone.shape);

        let now = ctx.current_time();
        gain.gain().set_value_at_time(tone.start_gain, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, now + tone.duration)?;

        oscillator.start()?;
        oscillator.stop_with_when(now + tone.duration)?;
        Ok(())
    }

    fn speak_text(text: &str) -> Result<(), JsValue> {
        let synth = dom::window().speech_synthesis()?;
        // Replace whatever narration is still playing.
        synth.cancel();
        let utterance = SpeechSynthesisUtterance::new_with_text(text)?;
        utterance.set_rate(0.85);
        utterance.set_pitch(1.0);
        utterance.set_lang("en-US");
        synth.speak(&utterance);
        Ok(())
    }
}

impl OutcomeNotifier for WebNotifier {
    fn play_outcome(&self, correct: bool) {
        let tone = if correct { &CORRECT_TONE } else { &INCORRECT_TONE };
        if let Err(e) = Self::play_tone(tone) {
            log::debug!("audio cue unavailable: {}", dom::js_error_message(&e));
        }
    }

    fn speak(&self, text: &str) {
        if let Err(e) = Self::speak_text(text) {
            log::debug!("speech unavailable: {}", dom::js_error_message(&e));
        }
    }
}

/// Stop any narration in progress, e.g. when a round advances or a screen
/// is left.
pub fn cancel_speech() {
    if let Ok(synth) = dom::window().speech_synthesis() {
        synth.cancel();
    }
}
