//! Pronunciation of Dutch words and example sentences.
//!
//! Speech is fire-and-forget: callers never wait on or inspect the result. A new
//! request cancels whatever is still being spoken, so the latest request wins.

use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeechSettings {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "nl-NL".to_string(),
            rate: 0.8,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub settings: SpeechSettings,
}

/// A text-to-speech backend.
pub trait Speaker {
    fn speak(&self, utterance: &Utterance);
    fn cancel(&self);
}

/// Desktop default: no platform voice, the utterance is logged.
#[derive(Default)]
pub struct LogSpeaker {
    last: Mutex<Option<Utterance>>,
}

impl LogSpeaker {
    pub fn last_utterance(&self) -> Option<Utterance> {
        self.last.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Speaker for LogSpeaker {
    fn speak(&self, utterance: &Utterance) {
        log::info!("🔊 [{}] {}", utterance.settings.language, utterance.text);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(utterance.clone());
        }
    }

    fn cancel(&self) {
        if let Ok(mut last) = self.last.lock() {
            *last = None;
        }
    }
}

pub struct Pronouncer {
    speaker: Box<dyn Speaker>,
    settings: SpeechSettings,
}

impl Pronouncer {
    pub fn new(speaker: Box<dyn Speaker>) -> Self {
        Self::with_settings(speaker, SpeechSettings::default())
    }

    pub fn with_settings(speaker: Box<dyn Speaker>, settings: SpeechSettings) -> Self {
        Self { speaker, settings }
    }

    pub fn pronounce(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            log::warn!("No word provided for pronunciation");
            return;
        }

        log::debug!("Pronouncing '{}'", text);
        self.speaker.cancel();
        self.speaker.speak(&Utterance {
            text: text.to_string(),
            settings: self.settings.clone(),
        });
    }
}
